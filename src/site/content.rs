//! Static page content

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Story {
    pub name: &'static str,
    pub image: &'static str,
    pub role: &'static str,
    pub description: &'static str,
    pub testimonial: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Step {
    pub number: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CareOption {
    pub title: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub duration: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Course {
    pub level: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub modules: u32,
    pub progress: u8,
    pub skills: &'static [&'static str],
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Job {
    pub id: u32,
    pub title: &'static str,
    pub location: &'static str,
    pub kind: &'static str,
    pub duration: &'static str,
    pub requirements: &'static str,
    pub pay: &'static str,
    pub urgent: bool,
}

/// A labelled number on a dashboard
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Activity {
    pub when: &'static str,
    pub text: &'static str,
}

// Home

pub const HOME_FEATURES: &[Feature] = &[
    Feature {
        icon: "🤝",
        title: "Trusted Connections",
        description: "Connect families with verified, trained caregivers through our secure platform",
    },
    Feature {
        icon: "📚",
        title: "Free Certification",
        description: "Comprehensive training programs to develop skilled, confident caregivers",
    },
    Feature {
        icon: "🔒",
        title: "Automated Safety",
        description: "OTP verification and automated communication ensure secure, reliable service",
    },
];

// About

pub const STORIES: &[Story] = &[
    Story {
        name: "Priya Sharma",
        image: "https://images.unsplash.com/photo-1582562124811-c09040d0a901?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
        role: "Senior Caregiver",
        description: "Transformed from a homemaker to a certified caregiver, now supporting 15+ families",
        testimonial: "Shatam gave me the confidence and skills to build a meaningful career while helping others. The training was comprehensive and the platform makes finding work so easy.",
    },
    Story {
        name: "Rajesh Kumar",
        image: "https://images.unsplash.com/photo-1472396961693-142e6e269027?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
        role: "Specialized Caregiver",
        description: "Specializes in Alzheimer's care, completed advanced certification program",
        testimonial: "The specialized training helped me understand complex care needs. I now help families navigate difficult times with compassion and expertise.",
    },
    Story {
        name: "Sunita Devi",
        image: "https://images.unsplash.com/photo-1518495973542-4542c06a5843?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&q=80",
        role: "Community Leader",
        description: "Started as a caregiver, now trains others in her community",
        testimonial: "What began as a way to earn income became my passion. Now I help other women in my village become certified caregivers and build better lives.",
    },
];

pub const VALUES: &[Feature] = &[
    Feature {
        icon: "💝",
        title: "Compassion",
        description: "Every interaction is guided by empathy and understanding",
    },
    Feature {
        icon: "🎯",
        title: "Excellence",
        description: "We strive for the highest standards in training and care",
    },
    Feature {
        icon: "🌟",
        title: "Empowerment",
        description: "We believe in creating opportunities for growth and dignity",
    },
];

/// Carousel position for a requested story index, wrapping in both directions
pub fn story_index(requested: i64) -> usize {
    let len = STORIES.len() as i64;
    requested.rem_euclid(len) as usize
}

// Services

pub const SERVICE_STEPS: &[Step] = &[
    Step {
        number: "01",
        icon: "📝",
        title: "Post Your Need",
        description: "Careseeker creates a detailed profile of care requirements, location, and timing preferences",
    },
    Step {
        number: "02",
        icon: "🤝",
        title: "Get Matched",
        description: "Our platform automatically matches you with qualified caregivers in your area",
    },
    Step {
        number: "03",
        icon: "🏠",
        title: "Caregiver Visits",
        description: "Selected caregiver visits your location and begins providing care",
    },
    Step {
        number: "04",
        icon: "🔐",
        title: "OTP Verification",
        description: "Caregiver uses OTP to confirm attendance and start the care session",
    },
];

pub const CARE_OPTIONS: &[CareOption] = &[
    CareOption {
        title: "Basic Care",
        description: "Daily assistance with meals, medication reminders, and companionship",
        features: &["Meal preparation", "Medication assistance", "Light housekeeping", "Companionship"],
        duration: "2-4 hours daily",
    },
    CareOption {
        title: "Medical Care",
        description: "Specialized care for specific medical conditions and post-surgery recovery",
        features: &["Medical monitoring", "Therapy assistance", "Wound care", "Health reporting"],
        duration: "4-8 hours daily",
    },
    CareOption {
        title: "24/7 Care",
        description: "Round-the-clock comprehensive care for those who need constant supervision",
        features: &["Continuous monitoring", "Emergency response", "Personal care", "Family communication"],
        duration: "Full-time live-in",
    },
];

pub const PLATFORM_FEATURES: &[Feature] = &[
    Feature {
        icon: "✅",
        title: "Verified Caregivers",
        description: "All caregivers are background-checked and certified through our training programs",
    },
    Feature {
        icon: "🛡️",
        title: "Secure & Automated",
        description: "OTP verification ensures attendance tracking and secure communication",
    },
    Feature {
        icon: "🔍",
        title: "Smart Matching",
        description: "AI-powered matching based on location, specialization, and availability",
    },
];

// Learning

pub const COURSES: &[Course] = &[
    Course {
        level: "Basic",
        title: "Fundamentals of Elderly Care",
        description: "Essential skills for providing compassionate and safe elderly care",
        duration: "4 weeks",
        modules: 8,
        progress: 0,
        skills: &["Basic health monitoring", "Safety protocols", "Communication", "Personal hygiene assistance"],
        color: "bg-green-500",
    },
    Course {
        level: "Medium",
        title: "Specialized Care Techniques",
        description: "Advanced care for specific conditions and medical needs",
        duration: "6 weeks",
        modules: 12,
        progress: 0,
        skills: &["Medication management", "Mobility assistance", "Dementia care", "Emergency response"],
        color: "bg-yellow-500",
    },
    Course {
        level: "Advanced",
        title: "Professional Caregiver Mastery",
        description: "Expert-level skills and leadership in elderly care",
        duration: "8 weeks",
        modules: 16,
        progress: 0,
        skills: &["Medical equipment", "Family counseling", "Care planning", "Team leadership"],
        color: "bg-red-500",
    },
];

pub const LEARNING_BENEFITS: &[Feature] = &[
    Feature {
        icon: "🎓",
        title: "Free Certification",
        description: "Complete training programs at no cost with official certification",
    },
    Feature {
        icon: "💼",
        title: "Job Placement",
        description: "Direct access to job opportunities upon course completion",
    },
    Feature {
        icon: "📱",
        title: "Mobile Learning",
        description: "Learn at your own pace with our mobile-friendly platform",
    },
    Feature {
        icon: "👨‍⚕️",
        title: "Expert Instructors",
        description: "Learn from healthcare professionals and experienced caregivers",
    },
];

pub const LEARNING_STEPS: &[Step] = &[
    Step {
        number: "1",
        icon: "",
        title: "Register & Assess",
        description: "Create your profile and take a skills assessment to determine your starting level",
    },
    Step {
        number: "2",
        icon: "",
        title: "Learn & Practice",
        description: "Progress through interactive modules with video lessons, quizzes, and practical exercises",
    },
    Step {
        number: "3",
        icon: "",
        title: "Get Certified & Work",
        description: "Complete your certification and get matched with families needing your services",
    },
];

// Jobs

pub const JOBS: &[Job] = &[
    Job {
        id: 1,
        title: "Senior Care - Daytime",
        location: "Mumbai, Bandra",
        kind: "Part-time",
        duration: "4 hours daily",
        requirements: "Basic care certification",
        pay: "₹15,000/month",
        urgent: true,
    },
    Job {
        id: 2,
        title: "Post-Surgery Care",
        location: "Delhi, CP",
        kind: "Short-term",
        duration: "2 weeks",
        requirements: "Medical care certification",
        pay: "₹25,000/month",
        urgent: false,
    },
];

// Dashboards

pub const ADMIN_STATS: &[Stat] = &[
    Stat { label: "Registered Caregivers", value: "1,248" },
    Stat { label: "Active Families", value: "862" },
    Stat { label: "Open Jobs", value: "37" },
    Stat { label: "Certifications This Month", value: "94" },
];

pub const ADMIN_ACTIVITY: &[Activity] = &[
    Activity { when: "2 hours ago", text: "New caregiver verification request from Pune" },
    Activity { when: "5 hours ago", text: "Post-Surgery Care job filled in Delhi, CP" },
    Activity { when: "Yesterday", text: "12 caregivers completed Fundamentals of Elderly Care" },
];

pub const CAREGIVER_STATS: &[Stat] = &[
    Stat { label: "Jobs Completed", value: "18" },
    Stat { label: "Average Rating", value: "4.8" },
    Stat { label: "Hours This Month", value: "96" },
];

pub const CARESEEKER_PREFERENCES: &[Stat] = &[
    Stat { label: "Care Type", value: "Basic + Medical" },
    Stat { label: "Schedule", value: "Monday - Friday" },
    Stat { label: "Duration", value: "6 months" },
];
