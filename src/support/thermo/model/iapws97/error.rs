use crate::models::water::if97::If97Error;
use crate::support::thermo::PropertyError;

impl From<If97Error> for PropertyError {
    fn from(error: If97Error) -> Self {
        let context = error.to_string();
        match error {
            If97Error::OutOfRange(_) => PropertyError::OutOfDomain { context },
            If97Error::Unsupported { .. } => PropertyError::Undefined { context },
            If97Error::InvalidQuantity { .. } => PropertyError::InvalidState { context },
            If97Error::Solver { .. } => PropertyError::Calculation { context },
        }
    }
}
