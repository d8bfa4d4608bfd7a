use super::binding::UiBinding;

/// Where the status indicator, halt control and address live.
pub trait StatusDisplay {
    fn apply(&mut self, binding: &UiBinding);
}

/// The halt confirmation panel.
pub trait ConfirmationPanel {
    fn show(&mut self);
    fn hide(&mut self);
    fn is_visible(&self) -> bool;
}

/// Restart the whole client from scratch, bypassing anything cached.
pub trait Reload {
    fn reload(&mut self);
}

impl<T: StatusDisplay + ?Sized> StatusDisplay for &mut T {
    fn apply(&mut self, binding: &UiBinding) {
        (**self).apply(binding)
    }
}

impl<T: Reload + ?Sized> Reload for &mut T {
    fn reload(&mut self) {
        (**self).reload()
    }
}
