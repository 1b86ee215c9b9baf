//! Soft input panel control.
//!
//! Handheld terminals with resistive touch screens drive text entry through
//! an on-screen keyboard (the soft input panel). Form screens summon it when
//! a text field gains focus and dismiss it afterwards. How the panel is
//! raised is the platform's business; this module only fixes the seam.

/// Platform hook for the terminal's soft input panel.
///
/// Implementations wrap whatever native input-method calls the platform
/// offers. The library keeps no panel state of its own; `set_visible` is
/// expected to be idempotent.
pub trait SoftInputPanel {
    /// Associated error type
    type Error: core::fmt::Debug;

    /// Show or hide the panel.
    fn set_visible(&mut self, visible: bool) -> Result<(), Self::Error>;

    /// Summon the panel.
    fn show(&mut self) -> Result<(), Self::Error> {
        self.set_visible(true)
    }

    /// Dismiss the panel.
    fn hide(&mut self) -> Result<(), Self::Error> {
        self.set_visible(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockPanel {
        visible: bool,
        calls: usize,
    }

    impl SoftInputPanel for MockPanel {
        type Error = ();

        fn set_visible(&mut self, visible: bool) -> Result<(), Self::Error> {
            self.visible = visible;
            self.calls += 1;
            Ok(())
        }
    }

    #[test]
    fn show_and_hide_drive_set_visible() {
        let mut panel = MockPanel::default();
        panel.show().unwrap();
        assert!(panel.visible);
        panel.hide().unwrap();
        assert!(!panel.visible);
        assert_eq!(panel.calls, 2);
    }
}
