//! Retrieval engine: top-k semantic search over a vector store.

use crate::error::EmbeddingError;
use crate::store::VectorStore;
use crate::traits::EmbeddingProvider;

/// Return the `min(top_k, store.len())` sentences most relevant to
/// `query`, most relevant first.
///
/// An empty store (or `top_k == 0`) short-circuits to an empty result
/// without calling the embedding backend. Repeated calls with identical
/// inputs return identical results; tie-breaking is by ascending corpus
/// position in both search paths.
pub async fn retrieve(
    store: &VectorStore,
    embedder: &dyn EmbeddingProvider,
    query: &str,
    top_k: usize,
) -> Result<Vec<String>, EmbeddingError> {
    let k = top_k.min(store.len());
    if k == 0 {
        return Ok(Vec::new());
    }

    let query_embedding = embedder.embed(query).await?;
    let positions = store.search(&query_embedding, k);

    tracing::debug!(query, k, hits = positions.len(), "retrieval complete");

    Ok(positions
        .into_iter()
        .map(|i| store.sentences()[i].clone())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SearchBackend;
    use crate::testutil::StubEmbedder;

    // Three sentences long enough to survive the store's length filter,
    // with hand-picked vectors: s1 points along the query axis, s2 at an
    // angle, s3 orthogonal.
    const S1: &str = "The scheduler assigns runnable processes to idle cpu cores";
    const S2: &str = "Virtual memory maps pages onto physical frames on demand";
    const S3: &str = "The filesystem journal records metadata updates before commit";

    fn corpus() -> String {
        format!("{S1}. {S2}. {S3}.")
    }

    fn embedder() -> StubEmbedder {
        StubEmbedder::new(2)
            .with_vector(S1, vec![1.0, 0.0])
            .with_vector(S2, vec![0.7, 0.7])
            .with_vector(S3, vec![0.0, 1.0])
            .with_vector("scheduling", vec![1.0, 0.1])
    }

    #[tokio::test]
    async fn returns_min_of_top_k_and_corpus_size() {
        let embedder = embedder();
        let store = VectorStore::build(&corpus(), &embedder, SearchBackend::BruteForceCosine)
            .await
            .unwrap();

        let hits = retrieve(&store, &embedder, "scheduling", 2).await.unwrap();
        assert_eq!(hits.len(), 2);

        let hits = retrieve(&store, &embedder, "scheduling", 50).await.unwrap();
        assert_eq!(hits.len(), 3);
    }

    #[tokio::test]
    async fn ranks_by_descending_cosine_similarity() {
        let embedder = embedder();
        let store = VectorStore::build(&corpus(), &embedder, SearchBackend::BruteForceCosine)
            .await
            .unwrap();

        let hits = retrieve(&store, &embedder, "scheduling", 3).await.unwrap();
        assert_eq!(hits, vec![S1.to_string(), S2.to_string(), S3.to_string()]);
    }

    #[tokio::test]
    async fn flat_l2_path_agrees_on_this_corpus() {
        let embedder = embedder();
        let store = VectorStore::build(&corpus(), &embedder, SearchBackend::FlatL2)
            .await
            .unwrap();
        assert!(store.has_index());

        let hits = retrieve(&store, &embedder, "scheduling", 1).await.unwrap();
        assert_eq!(hits, vec![S1.to_string()]);
    }

    #[tokio::test]
    async fn empty_store_returns_empty_not_error() {
        let embedder = StubEmbedder::new(2);
        let store = VectorStore::build("Too short. Tiny.", &embedder, SearchBackend::FlatL2)
            .await
            .unwrap();
        assert!(store.is_empty());
        assert!(!store.has_index());

        let hits = retrieve(&store, &embedder, "anything", 10).await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn top_k_zero_returns_empty() {
        let embedder = embedder();
        let store = VectorStore::build(&corpus(), &embedder, SearchBackend::BruteForceCosine)
            .await
            .unwrap();
        let hits = retrieve(&store, &embedder, "scheduling", 0).await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn repeated_calls_are_deterministic() {
        let embedder = embedder();
        let store = VectorStore::build(&corpus(), &embedder, SearchBackend::BruteForceCosine)
            .await
            .unwrap();

        let first = retrieve(&store, &embedder, "scheduling", 3).await.unwrap();
        for _ in 0..5 {
            let again = retrieve(&store, &embedder, "scheduling", 3).await.unwrap();
            assert_eq!(first, again);
        }
    }
}
