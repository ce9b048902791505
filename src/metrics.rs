//! @ai:module:intent Fixed set of key metric audits printed for every report
//! @ai:module:layer domain
//! @ai:module:public_api KEY_METRICS
//! @ai:module:stateless true

/// @ai:intent Audit identifiers of the key metrics, in print order
/// @ai:invariant exactly five entries, never read from the report
pub const KEY_METRICS: [&str; 5] = [
    "first-contentful-paint",
    "largest-contentful-paint",
    "total-blocking-time",
    "cumulative-layout-shift",
    "speed-index",
];
