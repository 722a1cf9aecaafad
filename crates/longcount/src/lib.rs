//! # baktun-longcount
//!
//! Long Count dates, distance-number arithmetic, and western calendar
//! conversion.
//!
//! A Long Count is a mixed-radix day count from the era origin
//! 4 Ajaw 8 Kumk'u: base 20 at every position except the winal, which
//! is base 18. Anchored to the Julian Day Number line by a correlation
//! constant, a Long Count converts to Gregorian and Julian dates and
//! derives its Calendar Round and Lord of the Night.
//!
//! # Quick start
//!
//! ```
//! use baktun_longcount::LongCount;
//!
//! let date: LongCount = "9.17.0.0.0".parse()?;
//! assert_eq!(date.build_calendar_round()?.to_string(), "13 Ajaw 18 Kumk'u");
//! assert_eq!(date.gregorian()?.to_string(), "22 January 771 CE");
//! # Ok::<(), baktun_longcount::LongCountError>(())
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `correlation` | Named Long Count / JDN correlation constants |
//! | `distance` | Signed mixed-radix distance numbers |
//! | `ops` | Digit-wise addition and subtraction |
//! | `long_count` | Epoch-anchored Long Count dates |
//! | `full_date` | Long Count paired with its Calendar Round |
//! | `western` | JDN to Gregorian and Julian conversion |
//! | `wildcard` | Expansion of partial counts and full dates |
//! | `error` | Error types |

mod correlation;
mod distance;
mod error;
mod full_date;
mod long_count;
mod ops;
mod western;
mod wildcard;

pub use correlation::CorrelationConstant;
pub use distance::{Digit, DistanceNumber};
pub use error::LongCountError;
pub use full_date::FullDate;
pub use long_count::{LongCount, LordOfNight};
pub use western::{jdn_to_gregorian, jdn_to_julian, WesternDate};
pub use wildcard::{expand_full_date, expand_long_count};
