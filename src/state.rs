#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GameState {
    Menu,    // Start screen with the START button
    Playing, // Stories cycling, auto or on input
}
