mod validator;

pub use validator::IContentValidator;
