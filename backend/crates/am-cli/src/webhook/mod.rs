pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod payload;
pub(crate) mod request;
pub(crate) mod result;

pub use client::{SUCCESS_MESSAGE, WebhookClient};
pub use error::{DispatchError, Result as DispatchResult};
pub use payload::{AdditionalInfo, WebhookPayload};
pub use request::WorkflowRequest;
pub use result::WebhookResult;
