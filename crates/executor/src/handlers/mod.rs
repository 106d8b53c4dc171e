//! Command handlers.
//!
//! | Module | Command | Needs vector space |
//! |--------|---------|--------------------|
//! | `search` | `Search` | semantic mode only |
//! | `themes` | `AuthorThemes` | authors above the profile floor |
//! | `stats` | `Stats` | no |
//! | `topics` | `Topics` | yes |

pub mod search;
pub mod stats;
pub mod themes;
pub mod topics;
