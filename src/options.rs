//! Game configuration options.

/// Wager used by the zero-argument [`Game::deal`](crate::Game::deal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DefaultWager {
    /// Always stake this many chips.
    Fixed(usize),
    /// Stake the wager of the last settled round (one chip before the first).
    RepeatLast,
}

impl Default for DefaultWager {
    fn default() -> Self {
        Self::Fixed(1)
    }
}

/// When the deck is refilled and shuffled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ReshufflePolicy {
    /// Keep drawing from the same deck and reshuffle a full deck once it runs
    /// out mid-round.
    #[default]
    WhenEmpty,
    /// Start every round from a freshly shuffled deck.
    EveryRound,
}

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_engine::{DefaultWager, GameOptions};
///
/// let options = GameOptions::default()
///     .with_starting_chips(250)
///     .with_default_wager(DefaultWager::RepeatLast)
///     .with_stand_on_soft_17(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Chip balance at the start and after a full reset.
    pub starting_chips: usize,
    /// Wager used when a round is dealt without an explicit amount.
    pub default_wager: DefaultWager,
    /// The dealer stops drawing at or above this value.
    pub dealer_stands_on: u8,
    /// Whether the dealer also stands on a soft total equal to `dealer_stands_on`.
    pub stand_on_soft_17: bool,
    /// Winnings multiplier for a winning natural blackjack.
    pub blackjack_pays: usize,
    /// When the deck is reshuffled.
    pub reshuffle: ReshufflePolicy,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_chips: 100,
            default_wager: DefaultWager::Fixed(1),
            dealer_stands_on: 17,
            stand_on_soft_17: true,
            blackjack_pays: 2,
            reshuffle: ReshufflePolicy::WhenEmpty,
        }
    }
}

impl GameOptions {
    /// Sets the starting chip balance.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_chips(500);
    /// assert_eq!(options.starting_chips, 500);
    /// ```
    #[must_use]
    pub const fn with_starting_chips(mut self, chips: usize) -> Self {
        self.starting_chips = chips;
        self
    }

    /// Sets the default wager policy.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::{DefaultWager, GameOptions};
    ///
    /// let options = GameOptions::default().with_default_wager(DefaultWager::Fixed(5));
    /// assert_eq!(options.default_wager, DefaultWager::Fixed(5));
    /// ```
    #[must_use]
    pub const fn with_default_wager(mut self, wager: DefaultWager) -> Self {
        self.default_wager = wager;
        self
    }

    /// Sets the value the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(16);
    /// assert_eq!(options.dealer_stands_on, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, value: u8) -> Self {
        self.dealer_stands_on = value;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the winnings multiplier for a natural blackjack.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(3);
    /// assert_eq!(options.blackjack_pays, 3);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, multiplier: usize) -> Self {
        self.blackjack_pays = multiplier;
        self
    }

    /// Sets the reshuffle policy.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_engine::{GameOptions, ReshufflePolicy};
    ///
    /// let options = GameOptions::default().with_reshuffle(ReshufflePolicy::EveryRound);
    /// assert_eq!(options.reshuffle, ReshufflePolicy::EveryRound);
    /// ```
    #[must_use]
    pub const fn with_reshuffle(mut self, policy: ReshufflePolicy) -> Self {
        self.reshuffle = policy;
        self
    }
}
