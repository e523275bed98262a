//! Careers listings

use crate::forms::JobPosting;

pub const JOB_POSTINGS: &[JobPosting] = &[
    JobPosting {
        id: "1",
        title: "Full Stack Developer",
        department: "Software",
        location: "Copenhagen, Denmark",
        job_type: "Full-time",
        summary: "Build scalable web applications using React, Node.js, and cloud technologies.",
    },
    JobPosting {
        id: "2",
        title: "IT Support Specialist",
        department: "Support",
        location: "Onsite",
        job_type: "Contract",
        summary: "Provide technical support and troubleshooting for our clients' IT infrastructure.",
    },
    JobPosting {
        id: "3",
        title: "DevOps Engineer",
        department: "Engineering",
        location: "Hybrid",
        job_type: "Full-time",
        summary: "Optimize deployment processes and automate our cloud infrastructure.",
    },
    JobPosting {
        id: "4",
        title: "UX/UI Designer",
        department: "Software",
        location: "Remote",
        job_type: "Part-time",
        summary: "Create beautiful and functional user interfaces for our products.",
    },
];

/// Hiring process steps shown under the listings
pub const HIRING_STEPS: &[(&str, &str)] = &[
    ("Email Application", "Send your application via email with resume and cover letter"),
    ("Initial Review", "HR team reviews your application within 3-5 business days"),
    ("Interview", "Technical and cultural fit interviews with team members"),
    ("Assessment", "Practical assessment or case study (if applicable)"),
    ("Offer", "Receive and discuss your offer package"),
];

/// Look up a posting by id
pub fn posting(id: &str) -> Option<&'static JobPosting> {
    JOB_POSTINGS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posting_lookup() {
        assert_eq!(posting("3").map(|p| p.title), Some("DevOps Engineer"));
        assert!(posting("99").is_none());
    }
}
