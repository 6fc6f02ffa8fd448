//! Demo content loaded at startup when `SEED_DEMO_DATA` is on. Values
//! are fixed so restarts and tests see the same data.

use chrono::{DateTime, Duration, Utc};

use crate::models::{Category, Post, Tag, User};
use crate::utils::slugify;

pub(crate) struct SeedData {
    pub users: Vec<User>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub posts: Vec<Post>,
    /// post id -> tag ids
    pub post_tags: Vec<(i32, Vec<i32>)>,
}

pub(crate) fn demo_data() -> SeedData {
    let now = Utc::now();

    SeedData {
        users: demo_users(now),
        categories: demo_categories(),
        tags: demo_tags(),
        posts: demo_posts(now),
        post_tags: vec![
            (1, vec![1, 3]),
            (2, vec![2, 4, 6]),
            (3, vec![3]),
            (4, vec![5, 3]),
            (5, vec![1, 5]),
        ],
    }
}

fn demo_categories() -> Vec<Category> {
    let category = |id: i32, name: &str, color: &str, description: &str| Category {
        id,
        name: name.to_string(),
        slug: slugify(name),
        color: color.to_string(),
        description: Some(description.to_string()),
    };

    vec![
        category(
            1,
            "Environment",
            "green",
            "Environmental conservation and sustainability",
        ),
        category(
            2,
            "Renewable Energy",
            "yellow",
            "Clean energy technologies and innovations",
        ),
        category(3, "Economy", "blue", "Economic aspects of sustainability"),
        category(
            4,
            "Decentralized Tech",
            "purple",
            "Blockchain and decentralized technologies",
        ),
    ]
}

fn demo_users(now: DateTime<Utc>) -> Vec<User> {
    let user = |id: i32,
                username: &str,
                avatar: &str,
                bio: &str,
                title: &str,
                posts_count: i32,
                followers_count: i32,
                days_ago: i64| User {
        id,
        username: username.to_string(),
        email: format!("{}@example.com", username.split('_').next().unwrap_or(username)),
        avatar: Some(avatar.to_string()),
        bio: Some(bio.to_string()),
        title: Some(title.to_string()),
        posts_count,
        followers_count,
        created_at: now - Duration::days(days_ago),
    };

    vec![
        user(
            1,
            "sarah_chen",
            "SC",
            "Energy policy researcher passionate about renewable energy solutions.",
            "Energy Policy Researcher",
            24,
            1280,
            90,
        ),
        user(
            2,
            "david_johnson",
            "DJ",
            "Economic analyst focusing on sustainable development.",
            "Economic Analyst",
            12,
            450,
            75,
        ),
        user(
            3,
            "mike_khan",
            "MK",
            "Blockchain developer building decentralized climate solutions.",
            "Blockchain Developer",
            18,
            980,
            60,
        ),
        user(
            4,
            "anna_lopez",
            "AL",
            "Environmental advocate and community organizer.",
            "Environmental Advocate",
            15,
            1520,
            45,
        ),
        user(
            5,
            "rachel_park",
            "RP",
            "Smart grid engineer working on energy storage solutions.",
            "Smart Grid Engineer",
            9,
            310,
            30,
        ),
    ]
}

fn demo_tags() -> Vec<Tag> {
    let tag = |id: i32, name: &str, color: &str| Tag {
        id,
        name: name.to_string(),
        slug: slugify(name),
        color: color.to_string(),
    };

    vec![
        tag(1, "Solar", "green"),
        tag(2, "Blockchain", "blue"),
        tag(3, "Sustainability", "amber"),
        tag(4, "DeFi", "purple"),
        tag(5, "Wind Energy", "green"),
        tag(6, "Carbon Credits", "gray"),
    ]
}

struct SeedPost {
    title: &'static str,
    content: &'static str,
    excerpt: &'static str,
    cover_image: &'static str,
    category_id: i32,
    author_id: i32,
    read_time: i32,
    likes: i32,
    views: i32,
    featured: bool,
    hours_ago: i64,
}

fn demo_posts(now: DateTime<Utc>) -> Vec<Post> {
    let seeds = [
        SeedPost {
            title: "The Future of Residential Solar: How Community Solar Gardens Are Changing Everything",
            content: "Community solar initiatives are making renewable energy accessible to everyone...",
            excerpt: "Discover how community solar initiatives are making renewable energy accessible to everyone, regardless of their housing situation or roof conditions.",
            cover_image: "https://images.unsplash.com/photo-1508514177221-188b1cf16e9d",
            category_id: 2,
            author_id: 1,
            read_time: 8,
            likes: 124,
            views: 1250,
            featured: true,
            hours_ago: 12,
        },
        SeedPost {
            title: "Blockchain for Carbon Credits: A Decentralized Approach",
            content: "Blockchain technology is revolutionizing carbon credit tracking...",
            excerpt: "How blockchain technology is revolutionizing carbon credit tracking and creating transparent, verifiable environmental impact.",
            cover_image: "https://images.unsplash.com/photo-1639762681485-074b7f938ba0",
            category_id: 4,
            author_id: 3,
            read_time: 5,
            likes: 89,
            views: 756,
            featured: false,
            hours_ago: 36,
        },
        SeedPost {
            title: "10 Simple Ways Communities Can Reduce Waste Together",
            content: "Practical strategies for community waste reduction...",
            excerpt: "Practical strategies that neighborhoods and communities can implement to significantly reduce their environmental footprint.",
            cover_image: "https://images.unsplash.com/photo-1542601906990-b4d3fb778b09",
            category_id: 1,
            author_id: 4,
            read_time: 3,
            likes: 156,
            views: 892,
            featured: false,
            hours_ago: 60,
        },
        SeedPost {
            title: "The Economics of Wind Energy: Why It's Becoming Unstoppable",
            content: "Wind energy economics analysis...",
            excerpt: "An analysis of how wind energy has become the cheapest source of electricity in many regions and what this means for the future.",
            cover_image: "https://images.unsplash.com/photo-1466611653911-95081537e5b7",
            category_id: 3,
            author_id: 2,
            read_time: 7,
            likes: 203,
            views: 1456,
            featured: false,
            hours_ago: 84,
        },
        SeedPost {
            title: "Smart Grids and Energy Storage: The Missing Pieces",
            content: "Understanding smart grid technology...",
            excerpt: "Understanding how smart grid technology and advanced energy storage solutions are enabling the renewable energy transition.",
            cover_image: "https://images.unsplash.com/photo-1559827260-dc66d52bef19",
            category_id: 2,
            author_id: 5,
            read_time: 6,
            likes: 112,
            views: 634,
            featured: false,
            hours_ago: 108,
        },
        SeedPost {
            title: "Cara Mudah Memulai Kompos di Rumah untuk Pemula",
            content: "Kompos adalah cara mudah mengurangi sampah organik sambil menciptakan pupuk alami...",
            excerpt: "Panduan lengkap memulai kompos di rumah dengan bahan-bahan sederhana yang mudah ditemukan.",
            cover_image: "https://images.unsplash.com/photo-1416879595882-3373a0480b5b",
            category_id: 1,
            author_id: 4,
            read_time: 4,
            likes: 89,
            views: 567,
            featured: false,
            hours_ago: 126,
        },
        SeedPost {
            title: "Mengapa Energi Surya Adalah Investasi Terbaik untuk Masa Depan",
            content: "Dengan biaya panel surya yang terus menurun, investasi energi surya menjadi semakin menarik...",
            excerpt: "Analisis investasi energi surya dan dampak positifnya terhadap lingkungan dan keuangan keluarga.",
            cover_image: "https://images.unsplash.com/photo-1508514177221-188b1cf16e9d",
            category_id: 2,
            author_id: 1,
            read_time: 7,
            likes: 145,
            views: 892,
            featured: false,
            hours_ago: 138,
        },
        SeedPost {
            title: "DeFi untuk Pembiayaan Proyek Lingkungan: Peluang dan Tantangan",
            content: "Decentralized Finance membuka peluang baru untuk mendanai proyek-proyek lingkungan...",
            excerpt: "Bagaimana teknologi DeFi dapat membantu membiayai proyek lingkungan dengan cara yang transparan.",
            cover_image: "https://images.unsplash.com/photo-1639762681485-074b7f938ba0",
            category_id: 4,
            author_id: 3,
            read_time: 8,
            likes: 73,
            views: 445,
            featured: false,
            hours_ago: 150,
        },
        SeedPost {
            title: "5 Teknologi Hijau yang Akan Mengubah Dunia di 2025",
            content: "Dari teknologi penangkap karbon hingga bioplastik, inilah inovasi yang akan membentuk masa depan...",
            excerpt: "Teknologi hijau terdepan yang siap merevolusi cara kita berinteraksi dengan lingkungan.",
            cover_image: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158",
            category_id: 2,
            author_id: 5,
            read_time: 6,
            likes: 198,
            views: 1123,
            featured: false,
            hours_ago: 6,
        },
    ];

    seeds
        .into_iter()
        .enumerate()
        .map(|(index, seed)| Post {
            id: index as i32 + 1,
            title: seed.title.to_string(),
            slug: slugify(seed.title),
            content: seed.content.to_string(),
            excerpt: seed.excerpt.to_string(),
            cover_image: Some(seed.cover_image.to_string()),
            category_id: Some(seed.category_id),
            author_id: Some(seed.author_id),
            read_time: seed.read_time,
            likes: seed.likes,
            views: seed.views,
            featured: seed.featured,
            published: true,
            created_at: now - Duration::hours(seed.hours_ago),
            updated_at: now,
        })
        .collect()
}
