//! Encoding resolution
//!
//! Validates channel bindings against an actual table before they become part
//! of an encoding, and validates advisory `{chartType, encoding}` proposals the
//! same way.
//!
//! ## Example
//!
//! ```rust,ignore
//! use vizspec_sdk::charts::{self, ChannelRole, ChartEncoding, ChartType};
//! use vizspec_sdk::encoding::EncodingResolver;
//!
//! let resolver = EncodingResolver::new();
//! let template = charts::lookup(ChartType::Bar);
//! let encoding = resolver.assign(&table, template, &ChartEncoding::new(), ChannelRole::X, "region")?;
//! let encoding = resolver.assign(&table, template, &encoding, ChannelRole::Y, "sales")?;
//! ```

mod advisory;
mod config;
mod error;
mod resolver;

pub use advisory::{
    AcceptedProposal, AdvisoryError, AdvisoryProposal, ProposedChannel,
    chart_type_from_suggestion, validate_proposal,
};
pub use config::ResolverConfig;
pub use error::{EncodingError, EncodingResult};
pub use resolver::{EncodingResolver, resolve, validate_encoding};
