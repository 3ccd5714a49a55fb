//! Cross-cutting query constraints composed onto repository methods.
//!
//! Every public movie listing excludes drafts and carries the canonical
//! ordering; writing the clauses once here keeps the repository methods from
//! repeating them.

use diesel::pg::Pg;
use diesel::prelude::*;

use crate::schema::{actors, movies};

pub type MovieBoxedQuery<'a> = movies::BoxedQuery<'a, Pg>;
pub type ActorBoxedQuery<'a> = actors::BoxedQuery<'a, Pg>;

/// Base filter for movie queries: draft rows never reach public listings
pub fn base_movie_filter(query: MovieBoxedQuery<'_>) -> MovieBoxedQuery<'_> {
    query.filter(movies::draft.eq(false))
}

/// Base ordering for movie queries: newest world premiere first
pub fn base_movie_ordering(query: MovieBoxedQuery<'_>) -> MovieBoxedQuery<'_> {
    query.order(movies::world_premiere.desc())
}

/// Base ordering for actor/director queries: name ascending
pub fn base_actor_director_ordering(query: ActorBoxedQuery<'_>) -> ActorBoxedQuery<'_> {
    query.order(actors::name.asc())
}
