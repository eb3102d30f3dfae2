/// Significant digits for a single converted account amount
pub const REFERENCE_PRECISION: u32 = 4;

/// Significant digits for per-account amounts in account-type totals
pub const ACCOUNT_TYPE_TOTALS_PRECISION: u32 = 6;

/// Significant digits for company-level totals
pub const COMPANY_TOTALS_PRECISION: u32 = 7;

/// Upper bound of `QueryService::users_capped`
pub const USER_CAP: usize = 10;

/// Field separator of the flat-file export
pub const EXPORT_FIELD_SEPARATOR: u8 = b'|';
