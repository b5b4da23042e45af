use fractic_server_error::{define_client_error, define_internal_error};
#[cfg(test)]
use fractic_server_error::ServerError;

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(InvalidCsv, "Invalid CSV format.");
define_client_error!(InvalidCsvContent, "Invalid CSV content: {details}.", { details: &str });
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });
define_client_error!(InvalidIsoDate, "Invalid ISO date: {date}.", { date: &str });
define_client_error!(
    InvalidCurrencyAmount,
    "Invalid currency amount: '{value}'.",
    { value: &str }
);
define_client_error!(
    InvalidQuarterKey,
    "Invalid fiscal quarter key: '{key}'. Expected a key like 'FY26-Q1'.",
    { key: &str }
);
define_client_error!(
    InvalidForecastConfig,
    "Invalid forecast configuration: {details}.",
    { details: &str }
);

// Purchase orders.
define_client_error!(MissingPoId, "A purchase order id is required.");
define_client_error!(
    PurchaseOrderNotFound,
    "Purchase order '{po_number}' not found.",
    { po_number: &str }
);
define_client_error!(
    ReadOnlyAttribute,
    "Attribute '{key}' of purchase order '{po_number}' is read-only.",
    { po_number: &str, key: &str }
);

// Forecast editing.
define_client_error!(
    LockedForecastPeriod,
    "Forecast period '{period}' is locked and cannot be edited.",
    { period: &str }
);
define_client_error!(
    ForecastPeriodNotFound,
    "Forecast period '{period}' is not part of the forecast.",
    { period: &str }
);

// Publishers.
define_client_error!(
    PublisherNotFound,
    "Publisher '{publisher_id}' not found.",
    { publisher_id: &str }
);

// Internal.
define_internal_error!(
    RepositoryPoisoned,
    "In-memory {store} store is poisoned (a writer panicked).",
    { store: &str }
);
define_internal_error!(JsonEncodeError, "Failed to encode {what} as JSON.", { what: &str });

/// Rendered message of an expected error, for asserting which error a
/// failing call produced.
#[cfg(test)]
pub(crate) fn error_message<T>(result: Result<T, ServerError>) -> String {
    match result {
        Ok(_) => panic!("expected an error, got Ok"),
        Err(e) => e.to_string(),
    }
}
