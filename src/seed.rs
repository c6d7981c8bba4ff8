//! Sample contacts written on first use of an empty store.

use crate::models::Contact;

const DAY_MS: i64 = 1000 * 60 * 60 * 24;

struct Sample {
    id: &'static str,
    first: &'static str,
    last: &'static str,
    avatar_url: &'static str,
    twitter_handle: &'static str,
    email: &'static str,
    phone: &'static str,
    company: &'static str,
    category: &'static str,
    favorite: bool,
    tags: &'static [&'static str],
    location: &'static str,
    notes: &'static str,
}

const SAMPLES: [Sample; 6] = [
    Sample {
        id: "seed-ava-nguyen",
        first: "Ava",
        last: "Nguyen",
        avatar_url: "https://avatar.iran.liara.run/public/2",
        twitter_handle: "ava_codes",
        email: "ava.nguyen@example.com",
        phone: "+84 90 123 4567",
        company: "Pixel Forge",
        category: "work",
        favorite: true,
        tags: &["design", "ux", "mentor"],
        location: "Ho Chi Minh City, VN",
        notes: "Product designer leading our new dashboard modernization effort. Loves quick feedback cycles.",
    },
    Sample {
        id: "seed-leo-phan",
        first: "Leo",
        last: "Phan",
        avatar_url: "https://avatar.iran.liara.run/public/job/doctor/female",
        twitter_handle: "drleophan",
        email: "leo.phan@mediplus.vn",
        phone: "+84 28 3824 8888",
        company: "MediPlus Clinic",
        category: "services",
        favorite: false,
        tags: &["health", "family"],
        location: "District 3, HCMC",
        notes: "Family doctor. Send the updated insurance card before the next visit.",
    },
    Sample {
        id: "seed-minh-vo",
        first: "Minh",
        last: "Vo",
        avatar_url: "https://avatar.iran.liara.run/public/job/designer/male",
        twitter_handle: "minhvo_dev",
        email: "minh.vo@stellar.app",
        phone: "+1 415 555 0110",
        company: "Stellar Apps",
        category: "friends",
        favorite: true,
        tags: &["react", "speaker"],
        location: "San Francisco, USA",
        notes: "Frontend lead at Stellar. Co-speaker for React Summit panel. Prefers async communication.",
    },
    Sample {
        id: "seed-chi-nguyen",
        first: "Chi",
        last: "Nguyen",
        avatar_url: "https://avatar.iran.liara.run/public/job/operator/female",
        twitter_handle: "chi_calls",
        email: "chi.nguyen@helpline.vn",
        phone: "+84 28 7100 8899",
        company: "Helpline VN",
        category: "community",
        favorite: false,
        tags: &["volunteer", "support"],
        location: "Can Tho, VN",
        notes: "Coordinates the weekend volunteer hotline. Share monthly metrics by the 5th.",
    },
    Sample {
        id: "seed-khang-le",
        first: "Khang",
        last: "Le",
        avatar_url: "https://avatar.iran.liara.run/public/job/teacher/male",
        twitter_handle: "teacherkhang",
        email: "khang.le@brightfuture.edu",
        phone: "+84 24 3773 2666",
        company: "Bright Future Academy",
        category: "family",
        favorite: false,
        tags: &["education"],
        location: "Hanoi, VN",
        notes: "Mai's homeroom teacher. Schedule parent conference during the first week of next semester.",
    },
    Sample {
        id: "seed-ella-vo",
        first: "Ella",
        last: "Vo",
        avatar_url: "https://avatar.iran.liara.run/public/job/astronomer/male",
        twitter_handle: "ella_in_space",
        email: "ella.vo@astro-labs.org",
        phone: "+44 20 7946 0958",
        company: "Astro Labs",
        category: "vip",
        favorite: true,
        tags: &["investor", "science"],
        location: "London, UK",
        notes: "Key advisor for the STEM scholarship fund. Visiting Vietnam in December; plan a meetup.",
    },
];

/// Number of sample contacts
pub const SAMPLE_COUNT: usize = SAMPLES.len();

/// Build a fresh, owned copy of the sample set.
///
/// Each sample is one day older than the previous one, counting back from
/// `now_ms`.
#[must_use]
pub fn sample_contacts(now_ms: i64) -> Vec<Contact> {
    SAMPLES
        .iter()
        .zip(0_i64..)
        .map(|(sample, index)| Contact {
            id: sample.id.to_string(),
            created_at: now_ms - index * DAY_MS,
            first: sample.first.to_string(),
            last: sample.last.to_string(),
            company: sample.company.to_string(),
            location: sample.location.to_string(),
            avatar_url: sample.avatar_url.to_string(),
            notes: sample.notes.to_string(),
            email: sample.email.to_string(),
            phone: sample.phone.to_string(),
            twitter_handle: sample.twitter_handle.to_string(),
            category: sample.category.to_string(),
            favorite: sample.favorite,
            tags: sample.tags.iter().map(ToString::to_string).collect(),
        })
        .collect()
}
