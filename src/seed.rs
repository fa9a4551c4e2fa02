use crate::movie::MovieRecord;

/// The three example records a fresh catalog starts with.
pub fn default_movies() -> Vec<MovieRecord> {
    vec![
        MovieRecord::new(
            "movie-dune",
            "Dune: Part Two",
            "Paul Atreides unites with the Fremen people while plotting revenge against the conspirators who destroyed his family.",
            "https://images.unsplash.com/photo-1502134249126-9f3755a50d78?auto=format&fit=crop&w=500&q=80",
            4.8,
        ),
        MovieRecord::new(
            "movie-arcane",
            "Arcane",
            "Sisters Vi and Jinx find themselves on opposing sides of a war between magic and technology in the steam-powered city of Piltover.",
            "https://images.unsplash.com/photo-1489599849927-2ee91cede3ba?auto=format&fit=crop&w=500&q=80",
            4.7,
        ),
        MovieRecord::new(
            "movie-spiderverse",
            "Spider-Man: Across the Spider-Verse",
            "Miles Morales embarks on an epic adventure across the multiverse, discovering a team of Spider-People dedicated to protecting its existence.",
            "https://images.unsplash.com/photo-1478720568477-152d9b164e26?auto=format&fit=crop&w=500&q=80",
            4.6,
        ),
    ]
}
