use chrono::{Duration, Utc};
use feedpost_api::{Author, PostId, RawContentBlock, RawFeed, RawPost};
use rand::{seq::SliceRandom, Rng};

const NUM_AUTHORS: usize = 5;
const NUM_POSTS: u64 = 20;

const MAX_BLOCKS_PER_POST: usize = 5;
const PARAGRAPH_WORD_COUNT: usize = 30;
// Posts are spread over this many days before now
const MAX_POST_AGE_DAYS: i64 = 400;

const ROLES: [&str; 4] = ["Web Developer", "Educator", "CTO", "Designer"];

fn gen_author(rng: &mut impl Rng, i: usize) -> Author {
    Author {
        name: lipsum::lipsum_title(),
        role: String::from(*ROLES.choose(rng).expect("ROLES is not empty")),
        avatar_url: format!("https://i.pravatar.cc/150?img={}", i + 1),
    }
}

fn gen_block(rng: &mut impl Rng) -> RawContentBlock {
    match rng.gen_range(0..10) {
        // sometimes emit a block type the app does not know, it should be dropped
        0 => RawContentBlock {
            typ: String::from("image"),
            content: lipsum::lipsum_words(3),
            url: None,
        },
        1..=2 => {
            let slug = lipsum::lipsum_words(1)
                .chars()
                .filter(|c| c.is_ascii_alphabetic())
                .collect::<String>()
                .to_lowercase();
            RawContentBlock {
                typ: String::from("link"),
                content: format!("{slug}.example"),
                url: rng
                    .gen_bool(0.5)
                    .then(|| format!("https://{slug}.example")),
            }
        }
        _ => RawContentBlock {
            typ: String::from("paragraph"),
            content: lipsum::lipsum_words(PARAGRAPH_WORD_COUNT),
            url: None,
        },
    }
}

fn main() {
    let mut rng = rand::thread_rng();
    let now = Utc::now();

    let authors = (0..NUM_AUTHORS)
        .map(|i| gen_author(&mut rng, i))
        .collect::<Vec<_>>();

    let mut posts = (0..NUM_POSTS)
        .map(|id| {
            let author = authors.choose(&mut rng).expect("authors is not empty").clone();
            let age = Duration::minutes(rng.gen_range(0..MAX_POST_AGE_DAYS * 24 * 60));
            let content = (0..rng.gen_range(1..=MAX_BLOCKS_PER_POST))
                .map(|_| gen_block(&mut rng))
                .collect();
            RawPost {
                id: PostId(id),
                author,
                published_at: now - age,
                content,
            }
        })
        .collect::<Vec<_>>();
    posts.sort_by_key(|p| std::cmp::Reverse(p.published_at));

    println!(
        "{}",
        serde_json::to_string_pretty(&RawFeed { posts }).expect("serializing feed")
    );
}
