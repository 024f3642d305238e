#![forbid(unsafe_code)]
//! mailcheck_batch — validation par lots d'adresses e-mail (syntaxe + DNS)

pub mod cache;
pub mod dispatch;
pub mod error;
pub mod input;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod resolver;
pub mod validator;

pub use cache::{DomainCache, Resolution};
pub use dispatch::{DispatchOptions, Dispatcher};
pub use error::RunError;
pub use record::{ResultRecord, Status};
pub use report::Summary;
pub use resolver::{
    DnsOptions, DnsResolver, DomainOutcome, DomainResolver, ExchangeSource, MxRecord,
    ResolverError,
};
pub use validator::{SyntaxResult, ValidationMode, check_syntax};
