/// Top-level session mode.
///
/// There is no terminal state: GameOver returns to Playing through a full
/// reset, and clearing the whole grid resets in place without leaving
/// Playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Title screen, waiting for the first fire press
    Start,
    /// Active play
    Playing,
    /// An enemy crossed the defense line; waiting for a fire press to restart
    GameOver,
}
