use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

use crate::client::DictionaryApi;
use crate::types::{ApiReply, GENERIC_ERROR, Lookup, STATUS_NO_DEFINITION};

/// Cross-references can point at each other; beyond this depth the chain
/// is treated as unresolvable.
const MAX_CROSS_REFERENCE_DEPTH: usize = 8;

/// Resolves a word to its definition through a three-tier fallback chain:
/// direct entry lookup, lemma lookup plus re-query for inflected forms,
/// and cross-reference resolution when an entry defers to another headword.
pub struct Resolver<A> {
    api: A,
}

impl<A: DictionaryApi> Resolver<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Never fails: returns status 200 with the definition, or
    /// [`STATUS_NO_DEFINITION`] with [`GENERIC_ERROR`].
    pub async fn resolve(&self, word: &str) -> Lookup {
        self.resolve_at(word, 0).await
    }

    // Boxed because cross-reference extraction recurses back into it.
    fn resolve_at<'a>(
        &'a self,
        word: &str,
        depth: usize,
    ) -> Pin<Box<dyn Future<Output = Lookup> + Send + 'a>> {
        let word = word.to_lowercase();

        Box::pin(async move {
            let mut reply = self.api.entries(&word).await;

            if !reply.is_ok() {
                let lemma_reply = self.api.lemmas(&word).await;

                reply = if lemma_reply.is_ok() {
                    match lemma_of(&lemma_reply) {
                        Some(base) => self.api.entries(&base.to_lowercase()).await,
                        // 200 without the inflection path; extraction on it
                        // classifies through the usual missing-field route
                        None => lemma_reply,
                    }
                } else {
                    lemma_reply
                };
            }

            let status = reply.status;
            let text = self.extract(&reply, depth).await;

            // 510 stands in for every failure; the real non-200 code from
            // the chain is not kept
            let status = if text == GENERIC_ERROR {
                STATUS_NO_DEFINITION
            } else {
                status
            };

            Lookup { status, text }
        })
    }

    /// Pull a definition out of a reply, following at most one
    /// cross-reference hop (which restarts the whole chain).
    async fn extract(&self, reply: &ApiReply, depth: usize) -> String {
        if !reply.is_ok() {
            return GENERIC_ERROR.to_string();
        }

        let doc = parse_lenient(&reply.body);

        if let Some(definition) = direct_definition(&doc) {
            return definition;
        }

        if let Some(target) = cross_reference(&doc) {
            if depth < MAX_CROSS_REFERENCE_DEPTH {
                return self.resolve_at(&target, depth + 1).await.text;
            }
        }

        GENERIC_ERROR.to_string()
    }
}

/// Parse failures yield Null so every path lookup below reports absent.
fn parse_lenient(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or(Value::Null)
}

fn direct_definition(doc: &Value) -> Option<String> {
    doc.pointer("/results/0/lexicalEntries/0/entries/0/senses/0/definitions/0")?
        .as_str()
        .map(str::to_string)
}

fn cross_reference(doc: &Value) -> Option<String> {
    doc.pointer("/results/0/lexicalEntries/0/entries/0/senses/0/crossReferences/0/text")?
        .as_str()
        .map(str::to_string)
}

fn lemma_of(reply: &ApiReply) -> Option<String> {
    parse_lenient(&reply.body)
        .pointer("/results/0/lexicalEntries/0/inflectionOf/0/text")?
        .as_str()
        .map(str::to_string)
}
