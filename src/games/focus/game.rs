//! Focus game implementation.

use rustc_hash::FxHashMap;
use tracing::{debug, info, instrument};

use crate::core::{
    Action, Board, Coord, FocusConfig, GameState, Origin, Piece, Player, PlayerId, Square, Turn,
};
use crate::error::{ConfigError, FocusError, InvalidMove};
use crate::rules::{Move, MoveOutcome, RulesEngine};

/// Orthogonal step directions: up, down, left, right.
const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// A single match of Focus between two named players.
#[derive(Clone, Debug)]
pub struct FocusGame {
    config: FocusConfig,
    state: GameState,
    /// Player lookup by name.
    names: FxHashMap<String, PlayerId>,
}

/// Builder for creating a FocusGame.
pub struct FocusGameBuilder {
    first: (String, Piece),
    second: (String, Piece),
    config: FocusConfig,
    board: Option<Board>,
}

impl Default for FocusGameBuilder {
    fn default() -> Self {
        Self {
            first: ("PlayerA".to_string(), Piece::new('R')),
            second: ("PlayerB".to_string(), Piece::new('G')),
            config: FocusConfig::default(),
            board: None,
        }
    }
}

impl FocusGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the first player ("player A").
    pub fn first_player(mut self, name: impl Into<String>, piece: impl Into<Piece>) -> Self {
        self.first = (name.into(), piece.into());
        self
    }

    /// Set the second player ("player B").
    pub fn second_player(mut self, name: impl Into<String>, piece: impl Into<Piece>) -> Self {
        self.second = (name.into(), piece.into());
        self
    }

    pub fn config(mut self, config: FocusConfig) -> Self {
        self.config = config;
        self
    }

    /// Start from a custom position instead of the standard layout.
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    /// Build the game.
    ///
    /// Fails if the players share a name or a piece, the config is invalid,
    /// or a custom board holds foreign pieces or over-tall stacks.
    pub fn build(self) -> Result<FocusGame, ConfigError> {
        self.config.validate()?;

        let (first_name, first_piece) = self.first;
        let (second_name, second_piece) = self.second;
        if first_name == second_name {
            return Err(ConfigError::DuplicateName(first_name));
        }
        if first_piece == second_piece {
            return Err(ConfigError::DuplicatePiece(first_piece.label()));
        }

        let mut names = FxHashMap::default();
        names.insert(first_name.clone(), PlayerId::FIRST);
        names.insert(second_name.clone(), PlayerId::SECOND);

        let mut state = GameState::new(
            Player::new(first_name, first_piece),
            Player::new(second_name, second_piece),
        );
        if let Some(board) = self.board {
            validate_board(&board, [first_piece, second_piece], &self.config)?;
            state.board = board;
        }

        Ok(FocusGame {
            config: self.config,
            state,
            names,
        })
    }
}

impl FocusGame {
    /// Create a game with the default rules.
    ///
    /// ```
    /// use focus_engine::games::focus::FocusGame;
    ///
    /// let game = FocusGame::new(("PlayerA", 'R'), ("PlayerB", 'G')).unwrap();
    /// assert_eq!(game.show_reserve("PlayerA"), Ok(0));
    /// ```
    pub fn new(
        first: (impl Into<String>, impl Into<Piece>),
        second: (impl Into<String>, impl Into<Piece>),
    ) -> Result<Self, ConfigError> {
        FocusGameBuilder::new()
            .first_player(first.0, first.1)
            .second_player(second.0, second.1)
            .build()
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &FocusConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[must_use]
    pub fn turn(&self) -> Turn {
        self.state.turn
    }

    /// Name of the player to move, or `None` before the first move.
    #[must_use]
    pub fn current_player_name(&self) -> Option<&str> {
        self.state
            .turn
            .player()
            .map(|id| self.state.players[id].name())
    }

    /// Look up a player's id by name.
    pub fn player_id(&self, name: &str) -> Result<PlayerId, FocusError> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| FocusError::InvalidPlayer(name.to_string()))
    }

    /// Look up a player by name.
    pub fn player(&self, name: &str) -> Result<&Player, FocusError> {
        let id = self.player_id(name)?;
        Ok(&self.state.players[id])
    }

    /// Pieces at a location, bottom first.
    pub fn show_pieces(&self, location: impl Into<Coord>) -> Result<&[Piece], FocusError> {
        let location: Coord = location.into();
        let square = Square::try_from(location)?;
        Ok(self.state.board.stack(square).as_slice())
    }

    /// A player's reserve count.
    pub fn show_reserve(&self, name: &str) -> Result<u32, FocusError> {
        self.player(name).map(Player::reserve)
    }

    /// A player's captured count.
    pub fn show_captured(&self, name: &str) -> Result<u32, FocusError> {
        self.player(name).map(Player::captured)
    }

    // === Moves ===

    /// Move the top `count` pieces from `origin` to `destination`.
    ///
    /// Runs range, turn and move validation before touching anything; a
    /// rejected move leaves the game exactly as it was. On a winning move the
    /// turn does not advance.
    #[instrument(level = "debug", skip_all, fields(player = %player_name, count = count))]
    pub fn move_piece(
        &mut self,
        player_name: &str,
        origin: impl Into<Coord>,
        destination: impl Into<Coord>,
        count: usize,
    ) -> Result<MoveOutcome, FocusError> {
        let origin: Coord = origin.into();
        let destination: Coord = destination.into();
        let result = self.try_move_piece(player_name, origin, destination, count);
        log_result(&result);
        result
    }

    /// Place one piece from the player's reserve onto `destination`.
    ///
    /// Fails if the reserve is empty. A winning placement leaves the reserve
    /// count as it was.
    #[instrument(level = "debug", skip_all, fields(player = %player_name))]
    pub fn reserved_move(
        &mut self,
        player_name: &str,
        destination: impl Into<Coord>,
    ) -> Result<MoveOutcome, FocusError> {
        let destination: Coord = destination.into();
        let result = self.try_reserved_move(player_name, destination);
        log_result(&result);
        result
    }

    fn try_move_piece(
        &mut self,
        player_name: &str,
        origin: Coord,
        destination: Coord,
        count: usize,
    ) -> Result<MoveOutcome, FocusError> {
        let mover = self.player_id(player_name)?;

        let origin = Square::try_from(origin)?;
        let destination = Square::try_from(destination)?;
        if self.state.board.height(origin) == 0 {
            return Err(InvalidMove::EmptyOrigin(origin).into());
        }

        self.execute(mover, Origin::Board(origin), destination, count)
    }

    fn try_reserved_move(
        &mut self,
        player_name: &str,
        destination: Coord,
    ) -> Result<MoveOutcome, FocusError> {
        let mover = self.player_id(player_name)?;
        if self.state.players[mover].reserve() == 0 {
            return Err(InvalidMove::NoReserve {
                player: player_name.to_string(),
            }
            .into());
        }

        let destination = Square::try_from(destination)?;
        self.execute(mover, Origin::Reserve, destination, 1)
    }

    /// Shared pipeline: turn check, validation, mutation, win check, turn advance.
    fn execute(
        &mut self,
        mover: PlayerId,
        origin: Origin,
        destination: Square,
        count: usize,
    ) -> Result<MoveOutcome, FocusError> {
        if !self.state.turn.allows(mover) {
            return Err(InvalidMove::NotYourTurn {
                player: self.state.players[mover].name().to_string(),
            }
            .into());
        }

        let state = &mut self.state;
        let mut mv = Move::new(mover, origin, destination, count, &mut state.board, &self.config);
        mv.validate(&state.players)?;

        // Validation passed; from here on the move is committed.
        mv.move_stack(&state.players);
        mv.adjust_stack(&mut state.players);
        let winner = mv.check_win(&state.players);
        state.move_count += 1;

        if let Some(winner) = winner {
            // The turn is claimed but not handed over.
            state.turn = Turn::Player(mover);
            let name = state.players[winner].name().to_string();
            info!(winner = %name, moves = state.move_count, "game won");
            return Ok(MoveOutcome::Won { winner: name });
        }

        if origin == Origin::Reserve {
            state.players[mover].dec_reserve();
        }
        state.advance_turn(mover);
        Ok(MoveOutcome::Moved)
    }
}

fn validate_board(board: &Board, pieces: [Piece; 2], config: &FocusConfig) -> Result<(), ConfigError> {
    for (square, stack) in board.iter() {
        if stack.len() > config.max_stack_height {
            return Err(ConfigError::Validation(format!(
                "stack at {} holds {} pieces, limit is {}",
                square,
                stack.len(),
                config.max_stack_height
            )));
        }
        if let Some(foreign) = stack.iter().find(|p| !pieces.contains(p)) {
            return Err(ConfigError::Validation(format!(
                "stack at {} holds piece {} belonging to neither player",
                square, foreign
            )));
        }
    }
    Ok(())
}

fn log_result(result: &Result<MoveOutcome, FocusError>) {
    match result {
        Ok(outcome) => debug!(%outcome, "move accepted"),
        Err(err) => debug!(%err, "move rejected"),
    }
}

impl RulesEngine for FocusGame {
    fn legal_actions(&self, player: PlayerId) -> Vec<Action> {
        if !self.state.turn.allows(player) {
            return vec![];
        }

        let own = self.state.players[player].piece();
        let limit = self.config.max_stack_height;
        let mut actions = Vec::new();

        for (square, stack) in self.state.board.iter() {
            if stack.last() != Some(&own) {
                continue;
            }
            for count in 1..=stack.len().min(limit) {
                for (d_row, d_col) in DIRECTIONS {
                    if let Some(destination) = square.offset(d_row, d_col, count) {
                        actions.push(Action::stack(square, destination, count));
                    }
                }
            }
        }

        if self.state.players[player].reserve() > 0 {
            actions.extend(Square::all().map(Action::reserve));
        }

        actions
    }

    fn apply_action(&mut self, player: PlayerId, action: &Action) -> Result<MoveOutcome, FocusError> {
        let name = self.state.players[player].name().to_string();
        match *action {
            Action::Stack {
                origin,
                destination,
                count,
            } => self.move_piece(&name, origin, destination, count),
            Action::Reserve { destination } => self.reserved_move(&name, destination),
        }
    }

    fn winner(&self) -> Option<PlayerId> {
        self.state
            .players
            .find(|p| self.config.is_winning_capture(p.captured()))
    }
}
