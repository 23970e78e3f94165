//! Prompt fragments of the form-generation request.
mod form_contract;
mod form_description;

pub use form_contract::FormContractFragment;
pub use form_description::FormDescriptionFragment;
