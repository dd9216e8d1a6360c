/// Почему тренд на свече получился таким, какой он есть
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TrendCause {
    /// close выше предыдущей верхней полосы
    BreakoutUp,
    /// close ниже предыдущей нижней полосы
    BreakoutDown,
    /// пробоя нет, тренд и подтянутая полоса переносятся
    Persist,
}
