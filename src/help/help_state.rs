#[derive(Debug, Default)]
pub struct HelpPopupState {
    pub visible: bool,
}

impl HelpPopupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}
