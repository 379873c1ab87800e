//! Test: Specification Filter - predicates select matching posts

use patterns::patterns::repository::{InMemoryRepository, Post, Repository};
use patterns::patterns::specification::{
    filter, AuthorSpecification, Specification, TitleMatchesSpecification,
};

/// Author == "Tonio" over a single Tonio post returns that post unchanged
#[test]
fn test_single_matching_post() {
    let post = Post::new("Design Patterns in Rust", "Tonio");
    let posts = vec![post.clone()];

    let matched = filter(&posts, &AuthorSpecification::new("Tonio"));

    assert_eq!(matched.len(), 1);
    assert_eq!(*matched[0], post);
}

/// Specifications compose over posts loaded from a repository
#[tokio::test]
async fn test_filter_repository_contents() {
    let repo: InMemoryRepository<Post> = InMemoryRepository::new();
    repo.add(Post::new("Rust ownership", "Tonio")).await.unwrap();
    repo.add(Post::new("Rust traits", "Ana")).await.unwrap();
    repo.add(Post::new("Kotlin flows", "Tonio")).await.unwrap();

    let posts = repo.list().await.unwrap();
    let spec = AuthorSpecification::new("Tonio")
        .and(TitleMatchesSpecification::new("^Rust").unwrap());

    let titles: Vec<_> = filter(&posts, &spec).into_iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["Rust ownership"]);
}

/// No match yields an empty selection
#[test]
fn test_no_match() {
    let posts = vec![Post::new("Design Patterns in Rust", "Tonio")];
    assert!(filter(&posts, &AuthorSpecification::new("Nobody")).is_empty());
}
