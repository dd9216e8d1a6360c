/// Направление тренда на свече. Down — значение по умолчанию для первой свечи.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum TrendState {
    Up,
    #[default]
    Down,
}

impl TrendState {
    pub fn is_up(self) -> bool {
        matches!(self, TrendState::Up)
    }
}

impl From<bool> for TrendState {
    fn from(is_up: bool) -> Self {
        if is_up { TrendState::Up } else { TrendState::Down }
    }
}
