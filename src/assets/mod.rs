/// Image decode and PNG encode helpers.
pub mod decode;
