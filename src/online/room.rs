//! Two-player online room.
//!
//! A `GameRoom` is the engine-side view of a remote `GameDocument`: the
//! host holds X, the guest holds O and the turn is tracked by participant
//! id. Moves go through the same `rules::apply_move` as local play, scored
//! by seat, and tallies are reported per participant id.

use rustc_hash::FxHashMap;
use tracing::{debug, instrument};

use super::document::GameDocument;
use crate::core::{winning_line_from, Board, Cell, GameState, Player, RandomSource, Scoreboard};
use crate::error::DocumentError;
use crate::rules::{self, Scoring};

/// What happened when a participant left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoomExit {
    /// The guest left; the O seat is open again.
    SeatFreed,
    /// The host left; the room should be deleted remotely.
    Closed,
    /// The user was not seated here.
    NotSeated,
}

/// A room with up to two participants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRoom {
    /// Store-assigned key. `None` until the room is created remotely.
    pub id: Option<String>,
    /// Room name shown in the lobby.
    pub name: String,
    /// Host id, plays X.
    pub player1: String,
    /// Guest id, plays O.
    pub player2: Option<String>,
    /// Participant to move. `None` until both seats are filled.
    pub current_player_id: Option<String>,
    /// Board, outcome and per-mark tallies.
    pub state: GameState,
}

impl GameRoom {
    /// Open a room with only the host seated.
    pub fn open(name: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            player1: host.into(),
            player2: None,
            current_player_id: None,
            state: GameState::new(Player::X),
        }
    }

    /// Attach the store-assigned key.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Both seats taken.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.player2.is_some()
    }

    /// The mark a participant plays, if seated.
    #[must_use]
    pub fn seat_of(&self, user: &str) -> Option<Player> {
        if user == self.player1 {
            Some(Player::X)
        } else if self.player2.as_deref() == Some(user) {
            Some(Player::O)
        } else {
            None
        }
    }

    /// The participant holding a mark.
    #[must_use]
    pub fn participant(&self, seat: Player) -> Option<&str> {
        match seat {
            Player::X => Some(self.player1.as_str()),
            Player::O => self.player2.as_deref(),
        }
    }

    /// Mark of the participant to move. `None` before the round starts.
    #[must_use]
    pub fn current_mark(&self) -> Option<Player> {
        self.current_player_id
            .as_deref()
            .and_then(|id| self.seat_of(id))
    }

    /// Seat a guest and start a round. Returns `false` if the room is full
    /// or the guest is the host.
    pub fn join<R: RandomSource + ?Sized>(&mut self, guest: impl Into<String>, rng: &mut R) -> bool {
        let guest = guest.into();
        if self.is_full() || guest == self.player1 {
            return false;
        }
        self.player2 = Some(guest);
        self.new_round(rng)
    }

    /// Remove a participant.
    pub fn leave(&mut self, user: &str) -> RoomExit {
        match self.seat_of(user) {
            Some(Player::X) => RoomExit::Closed,
            Some(Player::O) => {
                self.player2 = None;
                self.current_player_id = None;
                self.state = self.state.next_round(Player::X);
                RoomExit::SeatFreed
            }
            None => RoomExit::NotSeated,
        }
    }

    /// Start a new round with a randomly chosen opener. Tallies carry over.
    ///
    /// Returns `false` while the guest seat is open.
    pub fn new_round<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.is_full() {
            return false;
        }
        let opener = if rng.coin_flip() { Player::X } else { Player::O };
        self.current_player_id = self.participant(opener).map(str::to_owned);
        self.state = self.state.next_round(opener);
        true
    }

    /// Play `user`'s mark at `position`.
    ///
    /// Ignored (returns `false`) unless both seats are filled, it is `user`'s
    /// turn and the move is legal. Returns `true` when the state changed and
    /// the document should be pushed.
    ///
    /// The turn passes to the other participant only while the round is in
    /// progress; a winning or drawing move leaves `current_player_id` on the
    /// mover.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, user: &str, position: usize) -> bool {
        let Some(seat) = self.seat_of(user) else {
            debug!("not seated");
            return false;
        };
        if !self.is_full()
            || self.current_player_id.as_deref() != Some(user)
            || self.state.current_player != seat
        {
            debug!("not this participant's turn");
            return false;
        }

        match rules::apply_move(&self.state, position, &Scoring::hotseat()) {
            Ok(next) => {
                if !next.is_game_over {
                    let next_id = self.participant(seat.opposite()).map(str::to_owned);
                    self.current_player_id = next_id;
                }
                self.state = next;
                true
            }
            Err(reason) => {
                debug!(%reason, "move ignored");
                false
            }
        }
    }

    /// Rounds won by a participant. Zero for anyone not seated.
    #[must_use]
    pub fn wins_for(&self, user: &str) -> u32 {
        self.seat_of(user)
            .map_or(0, |seat| self.state.scores.wins_for(seat))
    }

    /// Rounds won, keyed by participant id.
    #[must_use]
    pub fn tallies(&self) -> FxHashMap<String, u32> {
        Player::BOTH
            .iter()
            .filter_map(|&seat| {
                self.participant(seat)
                    .map(|id| (id.to_owned(), self.state.scores.wins_for(seat)))
            })
            .collect()
    }

    /// Translate a remote document into a room.
    ///
    /// Rejects documents whose winner, line and game-over flag disagree
    /// with the board.
    pub fn from_document(doc: &GameDocument) -> Result<Self, DocumentError> {
        let cells = doc
            .board
            .iter()
            .map(|&v| Cell::from_ordinal(v).ok_or(DocumentError::UnknownCell(v)))
            .collect::<Result<Vec<_>, _>>()?;
        let board = Board::from_slice(&cells).ok_or(DocumentError::BoardLength(doc.board.len()))?;

        let scores = Scoreboard {
            victories: doc.player1_victories,
            defeats: doc.player2_victories,
            ties: doc.draws,
            x_wins: doc.player1_victories,
            o_wins: doc.player2_victories,
        };

        let mut room = Self {
            id: doc.id.clone(),
            name: doc.name.clone(),
            player1: doc.player1.clone(),
            player2: doc.player2.clone(),
            current_player_id: doc.current_player.clone(),
            state: GameState::with_scores(Player::X, scores),
        };

        let current = room.resolve_seat(doc.current_player.as_deref())?;
        let winner = room.resolve_seat(doc.winner.as_deref())?;

        room.state.board = board;
        room.state.current_player = current.unwrap_or(Player::X);
        room.state.winner = winner;
        room.state.is_game_over = doc.game_over || winner.is_some();
        room.state.winning_combination = winning_line_from(&doc.winning_combination)?;
        room.state.first_move = doc.first_move;
        rules::verify_outcome(&room.state)?;
        Ok(room)
    }

    /// Translate the room into its remote document.
    #[must_use]
    pub fn to_document(&self) -> GameDocument {
        let state = &self.state;
        GameDocument {
            id: self.id.clone(),
            name: self.name.clone(),
            player1: self.player1.clone(),
            player2: self.player2.clone(),
            current_player: self.current_player_id.clone(),
            board: state.board.ordinals().to_vec(),
            winning_combination: state.winning_combination.to_vec(),
            winner: state
                .winner
                .and_then(|p| self.participant(p))
                .map(str::to_owned),
            game_over: state.is_game_over,
            first_move: state.first_move,
            player1_victories: state.scores.x_wins,
            player2_victories: state.scores.o_wins,
            draws: state.scores.ties,
        }
    }

    fn resolve_seat(&self, user: Option<&str>) -> Result<Option<Player>, DocumentError> {
        user.map(|id| {
            self.seat_of(id)
                .ok_or_else(|| DocumentError::UnknownParticipant(id.to_owned()))
        })
        .transpose()
    }
}
