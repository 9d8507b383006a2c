//! # Catalog Seed
//!
//! The literal movie records the service ships with.

use crate::models::Movie;

/// Returns the seed movies in catalog order, ids 1 through 8.
pub fn seed_movies() -> Vec<Movie> {
    vec![
        Movie::new(
            1,
            "The Shawshank Redemption",
            1994,
            "Frank Darabont",
            "Drama",
            9.3,
            "Two imprisoned men bond over a number of years, finding solace and eventual redemption through acts of common decency.",
        ),
        Movie::new(
            2,
            "The Godfather",
            1972,
            "Francis Ford Coppola",
            "Crime",
            9.2,
            "The aging patriarch of an organized crime dynasty transfers control of his clandestine empire to his reluctant son.",
        ),
        Movie::new(
            3,
            "The Dark Knight",
            2008,
            "Christopher Nolan",
            "Action",
            9.0,
            "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice.",
        ),
        Movie::new(
            4,
            "Pulp Fiction",
            1994,
            "Quentin Tarantino",
            "Crime",
            8.9,
            "The lives of two mob hitmen, a boxer, a gangster and his wife, and a pair of diner bandits intertwine in four tales of violence and redemption.",
        ),
        Movie::new(
            5,
            "Forrest Gump",
            1994,
            "Robert Zemeckis",
            "Drama",
            8.8,
            "The presidencies of Kennedy and Johnson, the Vietnam War, the Watergate scandal and other historical events unfold from the perspective of an Alabama man with an IQ of 75.",
        ),
        Movie::new(
            6,
            "Inception",
            2010,
            "Christopher Nolan",
            "Sci-Fi",
            8.8,
            "A thief who steals corporate secrets through the use of dream-sharing technology is given the inverse task of planting an idea into the mind of a C.E.O.",
        ),
        Movie::new(
            7,
            "The Matrix",
            1999,
            "The Wachowskis",
            "Sci-Fi",
            8.7,
            "A computer hacker learns from mysterious rebels about the true nature of his reality and his role in the war against its controllers.",
        ),
        Movie::new(
            8,
            "Goodfellas",
            1990,
            "Martin Scorsese",
            "Crime",
            8.7,
            "The story of Henry Hill and his life in the mob, covering his relationship with his wife Karen Hill and his mob partners Jimmy Conway and Tommy DeVito.",
        ),
    ]
}
