mod error;
mod requests;
mod validation;
