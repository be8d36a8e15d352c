pub mod prelude;

pub mod comments;
