//! Constants for field and collection names used throughout the store.
//!
//! Centralizes every special name so the seeder, the filter matcher and the
//! domain callers agree on spelling.

/// Canonical identifier field of every stored document.
pub const ID_FIELD: &str = "_id";

/// Mirror of [`ID_FIELD`], kept identical for callers that read `id`.
pub const ID_ALIAS_FIELD: &str = "id";

/// Update operator that shallow-merges fields.
pub const SET_OPERATOR: &str = "$set";

/// Update operator that adds a numeric delta.
pub const INC_OPERATOR: &str = "$inc";

/// Update operator that appends to an array field.
pub const PUSH_OPERATOR: &str = "$push";

/// Prefix shared by all MongoDB query and update operators.
pub const OPERATOR_PREFIX: char = '$';

/// Blog post categories.
pub const CATEGORIES: &str = "categories";

/// Curated topics shown on the landing page.
pub const TOPICS: &str = "topics";

/// Blog posts.
pub const POSTS: &str = "posts";

/// Posts written in the community section.
pub const COMMUNITY_POSTS: &str = "communityPosts";

/// Community member profiles.
pub const COMMUNITY_USERS: &str = "communityUsers";

/// Community meetups and events.
pub const COMMUNITY_EVENTS: &str = "communityEvents";

/// Travel groups members can join.
pub const TRAVEL_GROUPS: &str = "travelGroups";

/// Comments on blog posts and community posts.
pub const COMMENTS: &str = "comments";

/// Foreign key from a comment to a blog post.
pub const POST_ID_FIELD: &str = "postId";

/// Foreign key from a comment to a community post.
pub const COMMUNITY_POST_ID_FIELD: &str = "communityPostId";

/// Order in which the seeder visits collections. Later entries may reference
/// ids produced by earlier ones.
pub const SEED_ORDER: &[&str] = &[
    CATEGORIES,
    TOPICS,
    POSTS,
    COMMUNITY_POSTS,
    COMMUNITY_USERS,
    COMMUNITY_EVENTS,
    TRAVEL_GROUPS,
    COMMENTS,
];
