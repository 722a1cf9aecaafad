//! # baktun-round
//!
//! Pure date arithmetic for the Maya Calendar Round: the 260-day
//! Tzolkin, the 365-day Haab, and their 18,980-day compound cycle.
//!
//! Every type is a small `Copy` value validated at construction; a
//! coefficient, day, or month may be a [`Component::Wildcard`] standing
//! for an unknown value, and the solver in [`wildcard`] expands such
//! partial dates into every concrete position consistent with them.
//!
//! # Quick start
//!
//! ```
//! use baktun_round::CalendarRound;
//!
//! let origin: CalendarRound = "4 Ajaw 8 Kumk'u".parse().unwrap();
//! assert_eq!(origin.next().unwrap().to_string(), "5 Imix 9 Kumk'u");
//! assert_eq!(origin.shift(18_980).unwrap(), origin);
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `component` | Wildcard-or-value component primitive |
//! | `tzolkin_day` | The 20-day name ring |
//! | `haab_month` | The 19-month name ring (5-day Wayeb) |
//! | `tzolkin` | The 260-day coefficient x day counter |
//! | `haab` | The 365-day coefficient x month counter |
//! | `calendar_round` | The paired counters and their cross-validity rule |
//! | `iter` | Iteration over the full 18,980-day cycle |
//! | `wildcard` | Partial-date expansion by cycle scan |
//! | `error` | Error types |

mod calendar_round;
mod component;
mod error;
mod haab;
mod haab_month;
mod iter;
mod tzolkin;
mod tzolkin_day;
mod wildcard;

pub use calendar_round::{CalendarRound, CALENDAR_ROUND_DAYS};
pub use component::Component;
pub use error::RoundError;
pub use haab::{Haab, HAAB_DAYS};
pub use haab_month::HaabMonth;
pub use iter::{cycle, CalendarRoundIter};
pub use tzolkin::{Tzolkin, TZOLKIN_DAYS};
pub use tzolkin_day::TzolkinDay;
pub use wildcard::expand_calendar_round;
