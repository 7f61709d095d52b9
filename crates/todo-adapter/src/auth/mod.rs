/*
[INPUT]:  Token strings handed over by the hosting environment
[OUTPUT]: Opaque bearer token type for authenticated requests
[POS]:    Auth layer - carries the caller's access token
[UPDATE]: When token handling changes
*/

pub mod token;

pub use token::AccessToken;
