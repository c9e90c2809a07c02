//! Single-use card tokens.

use crate::client::{Client, Params};
use crate::domain::Token;
use crate::error::Error;
use crate::ports::Method;

use super::{item_path, CardParams};

const TOKENS: &str = "/v1/tokens";

/// `/v1/tokens`
#[derive(Debug, Clone, Copy)]
pub struct Tokens<'a> {
    client: &'a Client,
}

impl<'a> Tokens<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Wrap card details in a token usable once in place of the card.
    pub async fn create(self, card: &CardParams) -> Result<Token, Error> {
        let mut params = Params::new();
        card.append_to(&mut params);

        self.client.request(Method::Post, TOKENS, &params).await
    }

    pub async fn retrieve(self, id: &str) -> Result<Token, Error> {
        self.client
            .request(Method::Get, &item_path(TOKENS, id), &Params::new())
            .await
    }
}
