mod order;
mod role;
mod security_context;
mod status;
