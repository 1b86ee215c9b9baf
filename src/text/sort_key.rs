//! GB2312 pinyin first-letter sort keys.
//!
//! Indexed list lookup on the terminal works by first letters: the operator
//! keys `ZS` and the list jumps to entries whose pinyin reads zh..sh..
//! These helpers map GB2312-encoded text (the device's native encoding) to
//! that key. Level-1 code points (regions 16-55) map through pinyin region
//! boundaries; level-2 code points (regions 56-87) map through a lookup
//! table carried over from the deployed terminal firmware, which stores its
//! letters in lowercase. ASCII passes through unchanged and anything
//! unmappable becomes a space.

use heapless::String;

/// Pinyin boundaries of the level-1 GB2312 region-position codes.
///
/// Each entry is (first code, one past last code, letter); codes are
/// `area * 100 + position`.
const LEVEL1: &[(u16, u16, char)] = &[
    (1601, 1637, 'A'),
    (1637, 1833, 'B'),
    (1833, 2078, 'C'),
    (2078, 2274, 'D'),
    (2274, 2302, 'E'),
    (2302, 2433, 'F'),
    (2433, 2594, 'G'),
    (2594, 2787, 'H'),
    (2787, 3106, 'J'),
    (3106, 3212, 'K'),
    (3212, 3472, 'L'),
    (3472, 3635, 'M'),
    (3635, 3722, 'N'),
    (3722, 3730, 'O'),
    (3730, 3858, 'P'),
    (3858, 4027, 'Q'),
    (4027, 4086, 'R'),
    (4086, 4390, 'S'),
    (4390, 4558, 'T'),
    (4558, 4684, 'W'),
    (4684, 4925, 'X'),
    (4925, 5249, 'Y'),
    (5249, 5590, 'Z'),
];

/// Level-2 first-letter table (codes 5601-8794), indexed by
/// `(area - 56) * 94 + position - 1`. Verbatim from the deployed firmware,
/// lowercase as stored there.
const SECONDARY: &str = concat!(
    "cjwgnspgcenegypbtwxzdxykygtpjnmjqmbsgzscyjsyyfpggbzgydywjkgaljswkbjqhyjwpdzlsgmr",
    "ybywwccgznkydgttngjeyekzydcjnmcylqlypyqbqrpzslwbdgkjfyxjwcltbncxjjjjcxdtqsqzycdxxhgckbphffss",
    "pybgmxjbbyglbhlssmzmpjhsojnghdzcdklgjhsgqzhxqgkezzwymcscjnyetxadzpmdssmzjjqjyzcjjfwqjbdzbjgd",
    "nzcbwhgxhqkmwfbpbqdtjjzkqhylcgxfptyjyyzpsjlfchmqshgmmxsxjpkdcmbbqbefsjwhwwgckpylqbgldlcctnma",
    "eddksjngkcsgxlhzaybdbtsdkdylhgymylcxpycjndqjwxqxfyyfjlejbzrwccqhqcsbzkymgplbmcrqcflnymyqmsqt",
    "rbcjthztqfrxchxmcjcjlxqgjmshzkbswxemdlckfsydsglycjjssjnqbjctyhbftdcyjdgwyghqfrxwckqkxebpdjpx",
    "jqsrmebwgjlbjslyysmdxlclqkxlhtjrjjmbjhxhwywcbhtrxxglhjhfbmgykldyxzpplggpmtcbbajjzyljtyanjgbj",
    "flqgdzyqcaxbkclecjsznslyzhlxlzcghbxzhznytdsbcjkdlzayffydlabbgqszkggldndnyskjshdlxxbcghxyggdj",
    "mmzngmmccgwzszxsjbznmlzdthcqydbdllscddnlkjyhjsycjlkohqasdhnhcsgaehdaashtcplcpqybsdmpjlpcjaql",
    "cdhjjasprchngjnlhlyyqyhwzpnccgwwmzffjqqqqxxaclbhkdjxdgmmydjxzllsygxgkjrywzwyclzmcsjzldbndcfc",
    "xyhlschycjqppqagmnyxpfrkssbjlyxyjjglnscmhcwwmnzjjlhmhchsyppttxrycsxbyhcsmxjsxnbwgpxxtaybgajc",
    "xlypdccwqocwkccsbnhcpdyznbcyytyckskybsqkkytqqxfcwchcwkelcqbsqyjqcclmthsywhmktlkjlychwheqjhtj",
    "hppqpqscfymmcmgbmhglgsllysdllljpchmjhwljcyhzjxhdxjlhxrswlwzjcbxmhzqxsdzpmgfcsglsdymjshxpjxom",
    "yqknmyblrthbcftpmgyxlchlhlzylxgsssscclsldclepbhshxyyfhbmgdfycnjqwlqhjjcywjztejjdhfblqxtqkwhd",
    "chqxagtlxljxmsljhdzkzjecxjcjnmbbjcsfywkbjzghysdcpqyrsljpclpwxsdwejbjcbcnaytmgmbapclyqbclzxcb",
    "nmsggfnzjjbzsfqyndxhpcqkzczwalsbccjxpozgwkybsgxfcfcdkhjbstlqfsgdslqwzkxtmhsbgzhjcrglyjbpmljs",
    "xlcjqqhzmjczydjwbmjklddpmjegxyhylxhlqyqhkycwcjmyhxnatjhyccxzpcqlbzwwwtwbqcmlbmynjcccxbbsnzzl",
    "jpljxyztzlgcldcklyrzzgqtgjhhgjljaxfgfjzslcfdqzlclgjdjcsnclljpjqdcclcjxmyzftsxgcgsbrzxjqqcczh",
    "gyjdjqqlzxjyldlbcyamcstylbdjbyregklzdzhldszchznwczcllwjqjjjkdgjcolbbzppglghtgzcygezmycnqcycy",
    "hbhgxkamtxyxnbskyzzgjzlqjdfcjxdygjqjjpmgwgjjjpkjsbgbmmcjssclpqpdxcdyykypcjddyygywchjrtgcnyql",
    "dkljczzgzccjgdyksgpzmdlcphnjafyzdjcnmwescsglbtzcgmsdllyxqsxsbljsbbsgghfjlwpmzjnlyywdqshzxtyy",
    "whmcyhywdbxbtlmswyyfsbjcbdxxlhjhfpsxzqhfzmqcztqcxzxrdkdjhnnyzqqfnqdmmgnydxmjgdhcdycbffallztd",
    "ltfkmxqzdngeqdbdczjdxbzgsqqddjcmbkxffxmkdmcsychzcmljdjynhprsjmkmpcklgdbqtfzswtfgglyplljzhgjj",
    "gypzltcsmcnbtjbhfkdhbyzgkpbbymtdlsxsbnpdkleycjnycdykzddhqgsdzsctarlltkzlgecllkjljjaqnbdggghf",
    "jtzqjsecshalqfmmgjnlyjbbtmlycxdcjpldlpcqdhsycbzsckbzmsljflhrbjsnbrgjhxpdgdjybzgdlgcsezgxlblg",
    "yxtwmabchecmwyjyzlljjshlgndjlslygkdzpzxjyyzlpcxszfgwyydlyhcljscmbjhblyjlycblydpdqysxktbytdkd",
    "xjypcnrjmfdjgklccjbctbjddbblblcdqrppxjcglzcshltoljnmdddlngkaqakgjgyhheznmshrphqqjchgmfprxcjg",
    "dychghlyrzqlcngjnzsqdkqjymszswlcfqjqxgbggxmdjwlmcrnfkkfsyyljbmqammmycctbshcptxxzzsmphfshmclm",
    "ldjfyqxsdyjdjjzzhqpdszglssjbckbxyqzjsgpsxjzqznqtbdkwxjkhhgflbcsmdldgdzdblzkycqnncsybzbfglzzx",
    "swmsccmqnjqsbdqsjtxxmbldxcclzshzcxrqjgjylxzfjphymzqqydfqjjlcznzjcdgzygcdxmzysctlkphtxhtlbjxj",
    "lxscdqccbbqjfqzfsltjbtkqbsxjjljchczdbzjdczjccprnlqcgpfczlclcxzdmxmphgsgzgszzqjxlwtjpfsyaslcj",
    "btckwcwmytcsjjljcqlwzmalbxyfbpnlschtgjwejjxxglljstgshjqlzfkcgnndszfdeqfhbsaqdgylbxmmygszldyd",
    "jmjjrgbjgkgdhgkblgkbdmbylxwcxyttybkmrjjzxqjbhlmhmjjzmqasldcyxyqdlqcafywyxqhz",
);

/// First pinyin letter of one GB2312 code point, given as its two encoded
/// bytes. Returns a space for code points outside both tables.
pub fn first_letter(bytes: [u8; 2]) -> char {
    let area = bytes[0].wrapping_sub(0xA0) as u16;
    let pos = bytes[1].wrapping_sub(0xA0) as u16;
    let code = area * 100 + pos;

    for &(start, end, letter) in LEVEL1 {
        if (start..end).contains(&code) {
            return letter;
        }
    }
    if (5601..=8794).contains(&code) {
        let index = (code as usize / 100 - 56) * 94 + code as usize % 100 - 1;
        if let Some(&b) = SECONDARY.as_bytes().get(index) {
            return b as char;
        }
    }
    ' '
}

/// Build the sort key for GB2312-encoded `text` into `out`.
///
/// ASCII bytes pass through unchanged; two-byte GB2312 sequences contribute
/// their first pinyin letter. Stops early if `out` fills up.
pub fn index_code<const N: usize>(text: &[u8], out: &mut String<N>) {
    let mut i = 0;
    while i < text.len() {
        let b = text[i];
        let letter = if b < 0x80 {
            i += 1;
            b as char
        } else if i + 1 < text.len() {
            let pair = [b, text[i + 1]];
            i += 2;
            first_letter(pair)
        } else {
            // Truncated trailing byte of a two-byte sequence.
            i += 1;
            ' '
        };
        if out.push(letter).is_err() {
            break;
        }
    }
}
