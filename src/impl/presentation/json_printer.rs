use fractic_server_error::ServerError;
use serde::Serialize;

use crate::errors::JsonEncodeError;

/// Renders output structures in their camelCase JSON shape.
pub(crate) struct JsonPrinter {
    pretty: bool,
}

impl JsonPrinter {
    pub(crate) fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub(crate) fn print<T: Serialize>(&self, value: &T, what: &str) -> Result<String, ServerError> {
        if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
        .map_err(|e| JsonEncodeError::with_debug(what, &e))
    }
}
