use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
  /// An edge object has no string `node` field naming its target.
  #[error("edge has no target node: {edge}")]
  EdgeWithoutTarget { edge: String },

  /// A stored document (`nodes` or `connections`) failed to deserialize.
  #[error("malformed {document} document: {source}")]
  MalformedDocument {
    document: &'static str,
    #[source]
    source: serde_json::Error,
  },
}
