//! Reference directories: official hotlines, platform reporting links, and
//! the evidence checklist.
//!
//! Contact details follow the Bangladesh Police listings as of the 7 Sept
//! 2025 checkpoint.

use serde::Serialize;

/// An official reporting hotline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hotline {
    /// Organisation or desk name.
    pub name: &'static str,
    /// Phone number(s).
    pub phone: &'static str,
    /// Email contact, if one is published.
    pub email: Option<&'static str>,
    /// What this channel is for.
    pub purpose: &'static str,
}

/// A platform's abuse-reporting entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformLink {
    /// Platform name.
    pub name: &'static str,
    /// Reporting or safety-centre URL.
    pub url: &'static str,
}

/// Official reporting and emergency contacts for Bangladesh.
pub const HOTLINES: &[Hotline] = &[
    Hotline {
        name: "National Emergency",
        phone: "999",
        email: None,
        purpose: "Immediate danger to life or ongoing extortion",
    },
    Hotline {
        name: "Police Cyber Support for Women (PCSW)",
        phone: "01320-000888",
        email: Some("cybersupport.women@police.gov.bd"),
        purpose: "Rapid help for women and girls facing online harassment or image-based abuse",
    },
    Hotline {
        name: "CID Cyber Police Centre (CPC)",
        phone: "01320-010148",
        email: Some("cyber@police.gov.bd"),
        purpose: "National cybercrime investigation and digital forensics",
    },
    Hotline {
        name: "Bangladesh Police (HQ) Operations",
        phone: "01320-001299 / 01320-001300",
        email: None,
        purpose: "General police operations contact",
    },
    Hotline {
        name: "ATU Cyber Crime Help Desk",
        phone: "01320-026996 / 01320-026997",
        email: Some("atu.cyberhelp@police.gov.bd"),
        purpose: "Specialised cybercrime support desk",
    },
];

/// Direct links to report abuse on major platforms.
pub const PLATFORM_LINKS: &[PlatformLink] = &[
    PlatformLink {
        name: "Facebook",
        url: "https://www.facebook.com/help/181495968648557",
    },
    PlatformLink {
        name: "Instagram",
        url: "https://help.instagram.com/165828726894770/",
    },
    PlatformLink {
        name: "Kik",
        url: "https://help.kik.com/hc/en-us/sections/18564762540315-Safety",
    },
    PlatformLink {
        name: "Roblox",
        url: "https://en.help.roblox.com/hc/en-us/articles/203312410-How-to-Report-Rule-Violations",
    },
    PlatformLink {
        name: "Snapchat",
        url: "https://help.snapchat.com/hc/en-us/articles/7012304746644-What-steps-can-I-take-to-help-protect-my-security-and-safety-on-Snapchat",
    },
    PlatformLink {
        name: "Threads",
        url: "https://help.instagram.com/6602413966453273/?helpref=related_articles",
    },
    PlatformLink {
        name: "TikTok",
        url: "https://www.tiktok.com/safety/en/bullying-prevention",
    },
    PlatformLink {
        name: "Tumblr",
        url: "https://www.tumblr.com/abuse",
    },
    PlatformLink {
        name: "WeChat",
        url: "https://help.wechat.com/cgi-bin/newreadtemplate?t=help_center/index&lang=en&plat=android&Channel=helpcenter",
    },
    PlatformLink {
        name: "WhatsApp",
        url: "https://faq.whatsapp.com/1313491802751163/?locale=en_US",
    },
    PlatformLink {
        name: "YouTube",
        url: "https://www.youtube.com/howyoutubeworks/our-policies/#reporting-and-enforcement",
    },
    PlatformLink {
        name: "X",
        url: "https://help.x.com/en/safety-and-security/report-abusive-behaviors",
    },
];

/// What to collect before filing a report.
pub const EVIDENCE_CHECKLIST: &[&str] = &[
    "Full-page screenshots with the URL bar visible (desktop) or share-sheet link (mobile)",
    "Screen recordings of chats and voice notes; keep the original files",
    "Message export files (JSON/ZIP) from platforms, with message IDs where available",
    "Account details of the abuser(s): profile URL, user ID, phone/email, known aliases",
    "Timestamps in local time, plus UTC if possible",
    "Content fingerprints of images and videos, to show tamper evidence",
    "Any threats or extortion demands: amounts, wallets, bKash/Nagad numbers",
    "Witness statements from teachers or classmates",
    "For deepfakes: the original image or video sources the fake was built from",
    "Keep two encrypted copies of the evidence pack on separate devices",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotlines_include_emergency_and_pcsw() {
        assert!(HOTLINES.iter().any(|h| h.phone == "999"));
        let pcsw = HOTLINES
            .iter()
            .find(|h| h.name.contains("PCSW"))
            .expect("PCSW hotline present");
        assert_eq!(pcsw.phone, "01320-000888");
        assert_eq!(pcsw.email, Some("cybersupport.women@police.gov.bd"));
    }

    #[test]
    fn test_platform_links_cover_major_platforms() {
        assert_eq!(PLATFORM_LINKS.len(), 12);
        for name in ["Facebook", "TikTok", "WhatsApp", "X"] {
            assert!(
                PLATFORM_LINKS.iter().any(|p| p.name == name),
                "missing {name}"
            );
        }
    }

    #[test]
    fn test_platform_links_are_https() {
        for link in PLATFORM_LINKS {
            assert!(link.url.starts_with("https://"), "{} not https", link.name);
        }
    }

    #[test]
    fn test_checklist_not_empty() {
        assert!(!EVIDENCE_CHECKLIST.is_empty());
        for line in EVIDENCE_CHECKLIST {
            assert!(!line.is_empty());
        }
    }

    #[test]
    fn test_hotline_serializes() {
        let json = serde_json::to_string(&HOTLINES[0]).unwrap();
        assert!(json.contains("999"));
    }
}
