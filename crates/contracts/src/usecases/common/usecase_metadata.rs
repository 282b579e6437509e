/// Identification of a use case, used for log prefixes and diagnostics.
pub trait UseCaseMetadata {
    /// Index such as "u501".
    fn usecase_index() -> &'static str;

    /// Technical name such as "submit_case".
    fn usecase_name() -> &'static str;

    fn description() -> &'static str {
        ""
    }

    /// "u501_submit_case"
    fn full_name() -> String {
        format!("{}_{}", Self::usecase_index(), Self::usecase_name())
    }
}
