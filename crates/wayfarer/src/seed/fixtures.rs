//! Sample travel content used to populate an empty store.
//!
//! Records never carry `_id` or `id`; every record gains a generated id when
//! it is inserted.

use serde_json::{json, Value};

use crate::constants::{
    CATEGORIES,
    COMMUNITY_EVENTS,
    COMMUNITY_POSTS,
    COMMUNITY_POST_ID_FIELD,
    COMMUNITY_USERS,
    POSTS,
    POST_ID_FIELD,
    TOPICS,
    TRAVEL_GROUPS,
};

/// Returns the fixed seed records for `collection`.
///
/// Collections without fixed records (including `comments`, whose records
/// depend on previously seeded ids) yield an empty list.
pub fn records(collection: &str) -> Vec<Value> {
    match collection {
        CATEGORIES => categories(),
        TOPICS => topics(),
        POSTS => posts(),
        COMMUNITY_POSTS => community_posts(),
        COMMUNITY_USERS => community_users(),
        COMMUNITY_EVENTS => community_events(),
        TRAVEL_GROUPS => travel_groups(),
        _ => Vec::new(),
    }
}

fn categories() -> Vec<Value> {
    vec![
        json!({
            "name": "Beaches",
            "slug": "beaches",
            "description": "Coastlines, islands and quiet coves.",
            "color": "#1e88e5"
        }),
        json!({
            "name": "Mountains",
            "slug": "mountains",
            "description": "Hikes, huts and high passes.",
            "color": "#43a047"
        }),
        json!({
            "name": "City Breaks",
            "slug": "city-breaks",
            "description": "Long weekends in walkable cities.",
            "color": "#8e24aa"
        }),
        json!({
            "name": "Food & Culture",
            "slug": "food-culture",
            "description": "Markets, festivals and where the locals eat.",
            "color": "#fb8c00"
        }),
        json!({
            "name": "Adventure",
            "slug": "adventure",
            "description": "Trips that need a packing list and a plan B.",
            "color": "#e53935"
        }),
    ]
}

fn topics() -> Vec<Value> {
    vec![
        json!({
            "name": "Budget Travel",
            "slug": "budget-travel",
            "description": "Stretching every euro without missing out.",
            "featured": true
        }),
        json!({
            "name": "Solo Trips",
            "slug": "solo-trips",
            "description": "Planning, safety and meeting people on the road.",
            "featured": true
        }),
        json!({
            "name": "Slow Travel",
            "slug": "slow-travel",
            "description": "Trains, ferries and staying a little longer.",
            "featured": false
        }),
        json!({
            "name": "Travel Gear",
            "slug": "travel-gear",
            "description": "What is worth carrying and what is not.",
            "featured": false
        }),
    ]
}

fn posts() -> Vec<Value> {
    vec![
        json!({
            "title": "Three Days on the Algarve Coast",
            "slug": "three-days-algarve-coast",
            "category": "Beaches",
            "author": "Marta Silva",
            "excerpt": "Sea caves, cliff walks and grilled sardines from Lagos to Sagres.",
            "content": "Start early at Ponta da Piedade before the boats arrive, then follow the cliff path west.",
            "tags": ["portugal", "coast", "road-trip"],
            "likes": 42,
            "featured": true,
            "publishedAt": "2024-04-12T09:00:00Z"
        }),
        json!({
            "title": "Hut to Hut in the Dolomites",
            "slug": "hut-to-hut-dolomites",
            "category": "Mountains",
            "author": "Jonas Weber",
            "excerpt": "A five-night rifugio route for hikers with a head for heights.",
            "content": "Book the huts in February; by June the popular ones on the Alta Via 1 are full.",
            "tags": ["italy", "hiking", "alps"],
            "likes": 87,
            "featured": true,
            "publishedAt": "2024-05-03T07:30:00Z"
        }),
        json!({
            "title": "Ljubljana in a Long Weekend",
            "slug": "ljubljana-long-weekend",
            "category": "City Breaks",
            "author": "Ana Novak",
            "excerpt": "Bridges, castle views and a day trip to Lake Bled.",
            "content": "The old town is small enough to cross on foot in twenty minutes.",
            "tags": ["slovenia", "weekend"],
            "likes": 23,
            "featured": false,
            "publishedAt": "2024-06-18T12:00:00Z"
        }),
        json!({
            "title": "Eating Through Oaxaca's Markets",
            "slug": "oaxaca-markets",
            "category": "Food & Culture",
            "author": "Diego Ramos",
            "excerpt": "Mole, tlayudas and the best hot chocolate in Mexico.",
            "content": "Mercado 20 de Noviembre has a smoke-filled aisle where you pick your meat and they grill it.",
            "tags": ["mexico", "food", "markets"],
            "likes": 64,
            "featured": false,
            "publishedAt": "2024-07-02T15:45:00Z"
        }),
        json!({
            "title": "Packrafting the Tatshenshini",
            "slug": "packrafting-tatshenshini",
            "category": "Adventure",
            "author": "Claire Dubois",
            "excerpt": "Ten days of glaciers, grizzlies and cold water.",
            "content": "Permits are allocated by lottery, so apply the autumn before you plan to go.",
            "tags": ["canada", "rafting", "wilderness"],
            "likes": 31,
            "featured": false,
            "publishedAt": "2024-08-21T18:10:00Z"
        }),
    ]
}

fn community_posts() -> Vec<Value> {
    vec![
        json!({
            "title": "Is the Interrail pass still worth it?",
            "content": "Seat reservations keep going up. Has anyone compared it with point-to-point tickets this year?",
            "author": "railfan_lena",
            "topic": "Budget Travel",
            "likes": 12,
            "replies": [],
            "createdAt": "2024-09-01T10:15:00Z"
        }),
        json!({
            "title": "First solo trip: Japan or Portugal?",
            "content": "Two weeks in October, moderate budget, no language skills for either.",
            "author": "wanderkai",
            "topic": "Solo Trips",
            "likes": 8,
            "replies": [],
            "createdAt": "2024-09-04T19:40:00Z"
        }),
        json!({
            "title": "Lightest rain shell you would trust in Scotland",
            "content": "Looking for something under 300g that survives the West Highland Way.",
            "author": "munro_bagger",
            "topic": "Travel Gear",
            "likes": 5,
            "replies": [],
            "createdAt": "2024-09-10T07:05:00Z"
        }),
    ]
}

fn community_users() -> Vec<Value> {
    vec![
        json!({
            "username": "railfan_lena",
            "displayName": "Lena Hoffmann",
            "homeBase": "Berlin",
            "bio": "Night trains over flights whenever possible.",
            "countriesVisited": 31,
            "joinedAt": "2023-11-02T00:00:00Z"
        }),
        json!({
            "username": "wanderkai",
            "displayName": "Kai Tanaka",
            "homeBase": "Vancouver",
            "bio": "Planning my first big solo trip.",
            "countriesVisited": 4,
            "joinedAt": "2024-08-15T00:00:00Z"
        }),
        json!({
            "username": "munro_bagger",
            "displayName": "Fiona MacLeod",
            "homeBase": "Inverness",
            "bio": "Two hundred Munros down, eighty-two to go.",
            "countriesVisited": 12,
            "joinedAt": "2022-03-21T00:00:00Z"
        }),
    ]
}

fn community_events() -> Vec<Value> {
    vec![
        json!({
            "title": "Photo Walk: Lisbon Miradouros",
            "location": "Lisbon, Portugal",
            "date": "2024-10-12T16:00:00Z",
            "organizer": "railfan_lena",
            "attendees": 18,
            "description": "Sunset walk across four viewpoints, ending in Alfama."
        }),
        json!({
            "title": "Trip Planning Night",
            "location": "Online",
            "date": "2024-10-24T19:00:00Z",
            "organizer": "wanderkai",
            "attendees": 44,
            "description": "Bring an itinerary draft and get feedback from the community."
        }),
    ]
}

fn travel_groups() -> Vec<Value> {
    vec![
        json!({
            "name": "Slow Rail Europe",
            "destination": "Europe",
            "description": "Routes, passes and sleeper-train reviews.",
            "members": 214,
            "private": false
        }),
        json!({
            "name": "Andes on a Shoestring",
            "destination": "South America",
            "description": "Backpacking Peru, Bolivia and Chile for under 40 dollars a day.",
            "members": 97,
            "private": false
        }),
        json!({
            "name": "Highland Hikers",
            "destination": "Scotland",
            "description": "Weekend trips and bothy meetups.",
            "members": 58,
            "private": true
        }),
    ]
}

/// Comments attached to the blog post with id `post_id`.
pub fn post_comments(post_id: &str) -> Vec<Value> {
    vec![
        json!({
            POST_ID_FIELD: post_id,
            "author": "Tom Becker",
            "text": "Benagil cave at low tide was the highlight of our trip, thanks for the tip!",
            "createdAt": "2024-04-14T08:20:00Z"
        }),
        json!({
            POST_ID_FIELD: post_id,
            "author": "Sofia Costa",
            "text": "Sagres at sunset gets crowded, go to Cabo de São Vicente an hour earlier.",
            "createdAt": "2024-04-16T21:05:00Z"
        }),
    ]
}

/// Comments attached to the community post with id `community_post_id`.
pub fn community_comments(community_post_id: &str) -> Vec<Value> {
    vec![json!({
        COMMUNITY_POST_ID_FIELD: community_post_id,
        "author": "munro_bagger",
        "text": "For three or more long legs it still pays off, otherwise buy early-bird tickets.",
        "createdAt": "2024-09-02T06:55:00Z"
    })]
}
