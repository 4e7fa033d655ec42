/// Pointer button identifier, named by editing role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    /// Left button: paint
    Primary,
    /// Right button: erase
    Secondary,
    /// Middle button: pan
    Tertiary,
}

impl Button {
    pub const ALL: [Button; 3] = [Button::Primary, Button::Secondary, Button::Tertiary];

    const fn bit(self) -> u8 {
        match self {
            Button::Primary => 1 << 0,
            Button::Secondary => 1 << 1,
            Button::Tertiary => 1 << 2,
        }
    }
}

/// Set of pointer buttons currently pressed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ButtonMask(u8);

impl ButtonMask {
    pub const EMPTY: ButtonMask = ButtonMask(0);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b111)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn with(self, button: Button) -> Self {
        Self(self.0 | button.bit())
    }

    pub const fn without(self, button: Button) -> Self {
        Self(self.0 & !button.bit())
    }

    pub const fn contains(self, button: Button) -> bool {
        self.0 & button.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Button> for ButtonMask {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        iter.into_iter().fold(ButtonMask::EMPTY, ButtonMask::with)
    }
}

/// Controller - pointer button state
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool {
        self.button_mask().contains(button)
    }

    /// All currently pressed buttons
    fn button_mask(&self) -> ButtonMask;
}
