//! Table configuration options.

use alloc::format;
use alloc::string::String;

use crate::rules::{PLAYERS, Seat};

/// Configuration options for a Schafkopf table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use schafkopf::TableOptions;
///
/// let options = TableOptions::default()
///     .with_human_seat(Some(2))
///     .with_starting_vorhand(1)
///     .with_cpu_min_trumps(6);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Seat controlled by a human, `None` for an all-CPU table.
    pub human_seat: Option<Seat>,
    /// Vorhand of the first round.
    pub starting_vorhand: Seat,
    /// Minimum trump count for a CPU seat to call a Rufspiel.
    pub cpu_min_trumps: u8,
    /// Minimum number of Queens and Jacks for a CPU seat to call a Rufspiel.
    pub cpu_min_high_trumps: u8,
    /// Display names per seat.
    pub player_names: [String; PLAYERS],
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            human_seat: Some(0),
            starting_vorhand: 0,
            cpu_min_trumps: 5,
            cpu_min_high_trumps: 2,
            player_names: core::array::from_fn(|seat| {
                if seat == 0 {
                    String::from("You")
                } else {
                    format!("CPU {seat}")
                }
            }),
        }
    }
}

impl TableOptions {
    /// Sets the human seat.
    ///
    /// # Example
    ///
    /// ```
    /// use schafkopf::TableOptions;
    ///
    /// let options = TableOptions::default().with_human_seat(None);
    /// assert_eq!(options.human_seat, None);
    /// ```
    #[must_use]
    pub fn with_human_seat(mut self, seat: Option<Seat>) -> Self {
        self.human_seat = match seat {
            Some(s) => Some(s % PLAYERS as Seat),
            None => None,
        };
        self
    }

    /// Sets the Vorhand of the first round.
    ///
    /// # Example
    ///
    /// ```
    /// use schafkopf::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_vorhand(3);
    /// assert_eq!(options.starting_vorhand, 3);
    /// ```
    #[must_use]
    pub fn with_starting_vorhand(mut self, seat: Seat) -> Self {
        self.starting_vorhand = seat % PLAYERS as Seat;
        self
    }

    /// Sets the minimum trump count for a CPU Rufspiel.
    ///
    /// # Example
    ///
    /// ```
    /// use schafkopf::TableOptions;
    ///
    /// let options = TableOptions::default().with_cpu_min_trumps(6);
    /// assert_eq!(options.cpu_min_trumps, 6);
    /// ```
    #[must_use]
    pub fn with_cpu_min_trumps(mut self, count: u8) -> Self {
        self.cpu_min_trumps = count;
        self
    }

    /// Sets the minimum Queen and Jack count for a CPU Rufspiel.
    ///
    /// # Example
    ///
    /// ```
    /// use schafkopf::TableOptions;
    ///
    /// let options = TableOptions::default().with_cpu_min_high_trumps(3);
    /// assert_eq!(options.cpu_min_high_trumps, 3);
    /// ```
    #[must_use]
    pub fn with_cpu_min_high_trumps(mut self, count: u8) -> Self {
        self.cpu_min_high_trumps = count;
        self
    }

    /// Sets the display name of `seat`. Out-of-range seats are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use schafkopf::TableOptions;
    ///
    /// let options = TableOptions::default().with_player_name(1, "Sepp");
    /// assert_eq!(options.player_names[1], "Sepp");
    /// ```
    #[must_use]
    pub fn with_player_name(mut self, seat: Seat, name: impl Into<String>) -> Self {
        if let Some(slot) = self.player_names.get_mut(seat as usize) {
            *slot = name.into();
        }
        self
    }
}
