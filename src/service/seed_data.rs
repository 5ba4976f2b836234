//! Built-in sample content served whenever nothing has been persisted.

use crate::domain::{Announcement, AttachmentType, Branch, GalleryEvent, Instructor};

const SAMPLE_PDF_URL: &str = "https://www.w3.org/WAI/ER/tests/xhtml/testfiles/resources/pdf/dummy.pdf";

const PHOTO_IDS: [&str; 25] = [
    "1552072092-7f9b8d63efcb", "1599566150163-29194dcaad36", "1555597673-b21d5c935865",
    "1509059852496-f3822ae057bf", "1544005313-94ddf0286df2", "1500648767791-00dcc994a43e",
    "1594911772125-07fc7a2d8d9f", "1583275484600-34152e61a81d", "1517836357463-d25dfeac3438",
    "1534438327276-14e5300c3a48", "1519704943960-da9750f76449", "1552072877-244bb0471550",
    "1544367567-0f2fcb009e0b", "1526506118085-60ce8714f8c5", "1518611012818-696af81a9c73",
    "1571019613454-1cb2f99b2d8b", "1517838276537-c225197195b9", "1533107862482-0e6974b06ec4",
    "1524594152303-9fd13543fe6e", "1495001258031-d1b407bc1776", "1541534741688-6078c64b5cd9",
    "1554068865-24bccd4e3d77", "1591117207239-7ad392038ff3", "1574680096145-d05b474e2155",
    "1517130038641-a774d04afb3c",
];

const VIDEO_SOURCES: [&str; 4] = [
    "https://www.w3schools.com/html/mov_bbb.mp4",
    "https://www.w3schools.com/html/horse.mp4",
    "https://vjs.zencdn.net/v/oceans.mp4",
    "https://v-cdn.paimon.moe/video/01.mp4",
];

const IMAGES_PER_EVENT: usize = 28;
const VIDEOS_PER_EVENT: usize = 5;

fn unsplash(photo_id: &str, width: u32) -> String {
    format!(
        "https://images.unsplash.com/photo-{}?auto=format&fit=crop&q=80&w={}",
        photo_id, width
    )
}

#[derive(Debug, Clone)]
pub struct SeedData {
    pub announcements: Vec<Announcement>,
    pub gallery: Vec<GalleryEvent>,
    pub instructors: Vec<Instructor>,
    pub branches: Vec<Branch>,
}

impl SeedData {
    pub fn generate() -> Self {
        Self {
            announcements: announcements(),
            gallery: gallery_events(),
            instructors: instructors(),
            branches: branches(),
        }
    }
}

fn announcements() -> Vec<Announcement> {
    (0..6)
        .map(|i| {
            let with_attachment = [1, 3, 4].contains(&i);
            Announcement {
                id: format!("ann-{}", i + 1),
                title: format!("Sample Announcement {}", i + 1),
                description: format!(
                    "This is sample announcement {} for demonstration. It contains placeholder text to simulate a real-world update for the academy portal.",
                    i + 1
                ),
                date: format!("2025-01-{}", 10 + i),
                show_on_home: i < 3,
                attachment_url: with_attachment.then(|| SAMPLE_PDF_URL.to_string()),
                attachment_type: with_attachment.then_some(AttachmentType::Pdf),
            }
        })
        .collect()
}

fn instructors() -> Vec<Instructor> {
    (0..6)
        .map(|i| Instructor {
            id: format!("ins-{}", i + 1),
            name: format!("Instructor {}", i + 1),
            designation: if i == 0 {
                "Founder / Head Master".to_string()
            } else {
                "Senior Instructor".to_string()
            },
            photo: unsplash(PHOTO_IDS[i], 400),
            contact_details: None,
            achievements: Some(vec![
                format!("Champion Title {}", i + 1),
                "Black Belt 5th Dan".to_string(),
            ]),
            journey: Some(format!(
                "Sample instructor bio describing experience, achievements, and teaching style. This instructor has dedicated over {} years to the mastery of martial arts and physical discipline.",
                10 + i
            )),
        })
        .collect()
}

fn gallery_events() -> Vec<GalleryEvent> {
    (0..6)
        .map(|i| GalleryEvent {
            id: format!("event-{}", i + 1),
            name: format!("Academy Event {}", i + 1),
            // Month is deliberately not zero padded.
            date: format!("2024-{}-15", 12 - i),
            description: "A comprehensive display of martial discipline and technical excellence. This event featured intense sparring, kata demonstrations, and foundational drills performed by students and instructors alike.".to_string(),
            folder_id: format!("folder-{}", i + 1),
            images: (0..IMAGES_PER_EVENT)
                .map(|j| unsplash(PHOTO_IDS[(j + i) % PHOTO_IDS.len()], 1200))
                .collect(),
            videos: (0..VIDEOS_PER_EVENT)
                .map(|j| VIDEO_SOURCES[j % VIDEO_SOURCES.len()].to_string())
                .collect(),
            show_on_home: i < 3,
            is_pinned: i == 0,
        })
        .collect()
}

fn branches() -> Vec<Branch> {
    (0..7)
        .map(|i| Branch {
            id: format!("{}", i + 1),
            name: format!("Branch Location {}", i + 1),
            address: format!("Academy Street Block {}, Maharashtra, India", i + 1),
            contact_number: "+91 93713 01228".to_string(),
            image: unsplash(PHOTO_IDS[i % PHOTO_IDS.len()], 800),
            google_maps_link: "#".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_collection_sizes() {
        let seed = SeedData::generate();
        assert_eq!(seed.announcements.len(), 6);
        assert_eq!(seed.gallery.len(), 6);
        assert_eq!(seed.instructors.len(), 6);
        assert_eq!(seed.branches.len(), 7);
    }

    #[test]
    fn test_ids_are_unique() {
        let seed = SeedData::generate();
        let ids: HashSet<_> = seed.gallery.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids.len(), seed.gallery.len());
        let ids: HashSet<_> = seed.announcements.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), seed.announcements.len());
    }

    #[test]
    fn test_announcement_details() {
        let seed = SeedData::generate();
        assert_eq!(seed.announcements[0].date, "2025-01-10");
        assert_eq!(seed.announcements[5].date, "2025-01-15");
        let home: Vec<_> = seed.announcements.iter().filter(|a| a.show_on_home).collect();
        assert_eq!(home.len(), 3);
        let with_attachment: Vec<_> = seed
            .announcements
            .iter()
            .filter(|a| a.attachment_url.is_some())
            .map(|a| a.id.as_str())
            .collect();
        assert_eq!(with_attachment, vec!["ann-2", "ann-4", "ann-5"]);
    }

    #[test]
    fn test_gallery_details() {
        let seed = SeedData::generate();
        let first = &seed.gallery[0];
        assert_eq!(first.name, "Academy Event 1");
        assert_eq!(first.date, "2024-12-15");
        assert_eq!(seed.gallery[5].date, "2024-7-15");
        assert_eq!(first.images.len(), 28);
        assert_eq!(first.videos.len(), 5);
        assert!(first.is_pinned);
        assert!(!seed.gallery[1].is_pinned);
        // each event's image pool is rotated by its index
        assert_eq!(seed.gallery[1].images[0], first.images[1]);
    }

    #[test]
    fn test_first_instructor_is_founder() {
        let seed = SeedData::generate();
        assert_eq!(seed.instructors[0].designation, "Founder / Head Master");
        assert_eq!(seed.instructors[3].designation, "Senior Instructor");
        assert_eq!(seed.instructors[2].achievements()[0], "Champion Title 3");
    }
}
