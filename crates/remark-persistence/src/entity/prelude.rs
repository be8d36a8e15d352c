pub use super::comments::Entity as Comments;
