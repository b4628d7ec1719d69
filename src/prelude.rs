//! Unit Price prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    comparison::{Classification, Comparison, cheapest_index, classify},
    fixtures::{FixtureError, ItemFixture, SheetFixture},
    focus::{FocusMove, FocusTarget, focus_order, next_focus},
    items::{Field, LineItem, parse_amount},
    observability::{LogFormat, LoggingConfig, ObservabilityError, init_subscriber},
    report::{Badge, ReportError, write_comparison},
    sheet::{DEFAULT_ROWS, Sheet, SheetError},
    units::{Unit, UnitError},
    utils::{ArgsError, CompareArgs, currency_from_code},
};
