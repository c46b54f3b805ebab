// Built-in therapist directory used when generated profiles are unavailable.

use super::therapists::TherapistProfile;

pub const BETTERHELP_URL: &str = "https://www.betterhelp.com";
pub const TALKSPACE_URL: &str = "https://www.talkspace.com";
pub const PSYCHOLOGY_TODAY_URL: &str = "https://www.psychologytoday.com/us/therapists";

pub fn default_directory() -> Vec<TherapistProfile> {
    vec![
        TherapistProfile {
            id: "dr-sarah-johnson".to_string(),
            name: "Dr. Sarah Johnson, Ph.D.".to_string(),
            specialty: "Cyberbullying Recovery & Digital Trauma".to_string(),
            rating: 4.9,
            website: BETTERHELP_URL.to_string(),
            availability: "Mon-Fri: 9:00 AM - 6:00 PM".to_string(),
            credentials: vec![
                "Licensed Clinical Psychologist".to_string(),
                "Certified Cyber Trauma Professional".to_string(),
                "Digital Wellness Specialist".to_string(),
                "15+ years experience in online harassment recovery".to_string(),
            ],
            ai_match_score: 98.0,
        },
        TherapistProfile {
            id: "dr-michael-chen".to_string(),
            name: "Dr. Michael Chen, Psy.D.".to_string(),
            specialty: "Social Media Anxiety & Digital Identity".to_string(),
            rating: 4.8,
            website: TALKSPACE_URL.to_string(),
            availability: "Tue-Sat: 10:00 AM - 7:00 PM".to_string(),
            credentials: vec![
                "Licensed Psychologist".to_string(),
                "Social Media Mental Health Specialist".to_string(),
                "Digital Anxiety Expert".to_string(),
                "Online Reputation Recovery Counselor".to_string(),
            ],
            ai_match_score: 95.0,
        },
        TherapistProfile {
            id: "dr-emily-martinez".to_string(),
            name: "Dr. Emily Martinez, Ph.D., LMFT".to_string(),
            specialty: "Digital Wellness & Online Harassment Recovery".to_string(),
            rating: 4.9,
            website: PSYCHOLOGY_TODAY_URL.to_string(),
            availability: "Mon-Thu: 8:00 AM - 5:00 PM".to_string(),
            credentials: vec![
                "Licensed Marriage and Family Therapist".to_string(),
                "Certified Digital Trauma Specialist".to_string(),
                "Cyberbullying Prevention Expert".to_string(),
                "Online Safety Counselor".to_string(),
            ],
            ai_match_score: 92.0,
        },
    ]
}
