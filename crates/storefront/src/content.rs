//! Blog and contact page content.
//!
//! The blog sidebar needs recent posts plus category and tag counts; the
//! contact page shows static company details and team cards. All of it is
//! loaded once at startup and read-only afterwards, like the catalog.

use chrono::NaiveDate;
use kranian_core::PostId;

/// A blog post as shown in listings and the sidebar.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub author: String,
    pub published_at: NaiveDate,
    /// Path to the post image, relative to the static root.
    pub image: String,
    pub category: String,
    pub tags: Vec<String>,
}

/// Content store that holds all loaded posts in memory, newest first.
#[derive(Debug, Clone)]
pub struct ContentStore {
    posts: Vec<Post>,
}

impl ContentStore {
    /// Create a store from a list of posts. Posts are sorted newest first.
    #[must_use]
    pub fn new(mut posts: Vec<Post>) -> Self {
        posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Self { posts }
    }

    /// The built-in Kranian Farms blog.
    #[must_use]
    pub fn kranian() -> Self {
        Self::new(demo_posts())
    }

    /// Get a post by slug.
    #[must_use]
    pub fn get_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// The most recent posts, for the sidebar.
    #[must_use]
    pub fn recent_posts(&self, limit: usize) -> Vec<&Post> {
        self.posts.iter().take(limit).collect()
    }

    /// Category names with post counts, alphabetical.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(String, usize)> {
        count_by(self.posts.iter().map(|p| p.category.clone()))
    }

    /// Tag names with post counts, alphabetical.
    #[must_use]
    pub fn tag_counts(&self) -> Vec<(String, usize)> {
        count_by(self.posts.iter().flat_map(|p| p.tags.iter().cloned()))
    }

    /// All posts, newest first.
    #[must_use]
    pub fn all(&self) -> &[Post] {
        &self.posts
    }
}

fn count_by(names: impl Iterator<Item = String>) -> Vec<(String, usize)> {
    let mut counts = std::collections::BTreeMap::new();
    for name in names {
        *counts.entry(name).or_insert(0) += 1;
    }
    counts.into_iter().collect()
}

/// A team member card on the contact page.
#[derive(Debug, Clone)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub quote: String,
    pub email: String,
    pub phone: String,
}

/// Static contact page details.
#[derive(Debug, Clone)]
pub struct ContactInfo {
    pub address: String,
    pub email: String,
    pub instagram: String,
    pub facebook: String,
    pub team: Vec<TeamMember>,
}

impl ContactInfo {
    /// The Kranian Farms contact details.
    #[must_use]
    pub fn kranian() -> Self {
        Self {
            address: "APA Arcade, 2nd Floor Suite 20, Argwings Kodhek Road, \
                      Hurlingham. Nairobi Kenya"
                .to_string(),
            email: "info@kranianfarms.com".to_string(),
            instagram: "https://www.instagram.com/kranianfarms_kenya/".to_string(),
            facebook: "https://www.facebook.com/profile.php?id=61575074558774".to_string(),
            team: vec![
                TeamMember {
                    name: "Rachel".to_string(),
                    role: "Co-Founder".to_string(),
                    quote: "At Kranian Farms, I grow more than crops--I grow community."
                        .to_string(),
                    email: "rachel@kranianfarms.com".to_string(),
                    phone: "+254701640801".to_string(),
                },
                TeamMember {
                    name: "Brian".to_string(),
                    role: "Co-Founder".to_string(),
                    quote: "Every stem we ship carries a piece of Kenya with it.".to_string(),
                    email: "brian@kranianfarms.com".to_string(),
                    phone: "+254702726346".to_string(),
                },
            ],
        }
    }
}

fn demo_posts() -> Vec<Post> {
    let post = |id: i32,
                slug: &str,
                title: &str,
                excerpt: &str,
                date: (i32, u32, u32),
                image: &str,
                category: &str,
                tags: &[&str]| Post {
        id: PostId::new(id),
        slug: slug.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        author: "Kranian Farms".to_string(),
        published_at: NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap_or(NaiveDate::MIN),
        image: format!("images/blog/{image}"),
        category: category.to_string(),
        tags: tags.iter().map(ToString::to_string).collect(),
    };

    vec![
        post(
            1,
            "caring-for-cut-roses",
            "Caring for Cut Roses",
            "How to keep export-grade roses fresh for two weeks or more.",
            (2025, 3, 14),
            "caring-for-cut-roses.jpg",
            "Flower Care",
            &["roses", "care"],
        ),
        post(
            2,
            "a-season-on-the-farm",
            "A Season on the Farm",
            "What goes into a year of growing at altitude in Kenya.",
            (2025, 2, 2),
            "a-season-on-the-farm.jpg",
            "Farm Life",
            &["farming", "kenya"],
        ),
        post(
            3,
            "choosing-stem-lengths",
            "Choosing Stem Lengths for Your Event",
            "Why 60cm is our default and when to go longer.",
            (2025, 1, 20),
            "choosing-stem-lengths.jpg",
            "Flower Care",
            &["roses", "events"],
        ),
        post(
            4,
            "from-nairobi-to-the-world",
            "From Nairobi to the World",
            "Inside our export cold chain, from greenhouse to airport.",
            (2024, 11, 8),
            "from-nairobi-to-the-world.jpg",
            "Export",
            &["export", "kenya"],
        ),
    ]
}
