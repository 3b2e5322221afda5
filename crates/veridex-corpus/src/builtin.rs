//! Built-in fallback authorities
//!
//! Used whenever a corpus category file is absent or unreadable, so the
//! engine always has something to search.

use veridex_domain::{AffidavitTemplate, CaseLaw, ConstitutionalProvision, Statute};

pub fn case_law() -> Vec<CaseLaw> {
    vec![
        CaseLaw {
            case_name: "Hale v. Henkel".to_string(),
            citation: "201 U.S. 43 (1906)".to_string(),
            year: 1906,
            jurisdiction: "supreme_court".to_string(),
            holding: "The individual may stand upon his constitutional rights as a citizen. \
                      He is entitled to carry on his private business in his own way. \
                      His rights are protected against both federal and state interference."
                .to_string(),
            remedy_types: vec![
                "sovereignty".to_string(),
                "rights_protection".to_string(),
                "constitutional".to_string(),
            ],
            key_principles: vec![
                "sovereign immunity".to_string(),
                "right to contract".to_string(),
                "private business protection".to_string(),
            ],
        },
        CaseLaw {
            case_name: "Bond v. United States".to_string(),
            citation: "529 U.S. 334 (2000)".to_string(),
            year: 2000,
            jurisdiction: "supreme_court".to_string(),
            holding: "The Constitution protects individuals from intrusion by the government, \
                      including in their relationships with others."
                .to_string(),
            remedy_types: vec![
                "rights_protection".to_string(),
                "government_limitation".to_string(),
            ],
            key_principles: vec![
                "right to privacy".to_string(),
                "government limitations".to_string(),
                "individual sovereignty".to_string(),
            ],
        },
        CaseLaw {
            case_name: "Marbury v. Madison".to_string(),
            citation: "5 U.S. (1 Cranch) 137 (1803)".to_string(),
            year: 1803,
            jurisdiction: "supreme_court".to_string(),
            holding: "It is emphatically the province and duty of the judicial department \
                      to say what the law is."
                .to_string(),
            remedy_types: vec![
                "judicial_review".to_string(),
                "constitutional_law".to_string(),
            ],
            key_principles: vec![
                "judicial review".to_string(),
                "separation of powers".to_string(),
                "constitutional supremacy".to_string(),
            ],
        },
        CaseLaw {
            case_name: "Murdock v. Pennsylvania".to_string(),
            citation: "319 U.S. 105 (1943)".to_string(),
            year: 1943,
            jurisdiction: "supreme_court".to_string(),
            holding: "A state may not, through licensing requirements, impose a prior \
                      restraint on the exercise of constitutional rights."
                .to_string(),
            remedy_types: vec![
                "rights_protection".to_string(),
                "religious_freedom".to_string(),
                "prior_restraint".to_string(),
            ],
            key_principles: vec![
                "first amendment".to_string(),
                "prior restraint".to_string(),
                "religious freedom".to_string(),
            ],
        },
    ]
}

pub fn constitutional_provisions() -> Vec<ConstitutionalProvision> {
    vec![
        ConstitutionalProvision {
            provision: "Article IV - Privileges and Immunities".to_string(),
            article: "IV".to_string(),
            section: "2".to_string(),
            text: "The Citizens of each State shall be entitled to all Privileges and \
                   Immunities of Citizens in the several States."
                .to_string(),
            application: "Protects right to travel and conduct business across state lines"
                .to_string(),
        },
        ConstitutionalProvision {
            provision: "First Amendment - Religious Freedom".to_string(),
            article: "I".to_string(),
            section: String::new(),
            text: "Congress shall make no law respecting an establishment of religion, \
                   or prohibiting the free exercise thereof."
                .to_string(),
            application: "Protects free exercise of religious beliefs and conscience".to_string(),
        },
        ConstitutionalProvision {
            provision: "Fourth Amendment - Unreasonable Searches".to_string(),
            article: "IV".to_string(),
            section: String::new(),
            text: "The right of the people to be secure in their persons, houses, papers, \
                   and effects, against unreasonable searches and seizures, shall not be \
                   violated."
                .to_string(),
            application: "Protects privacy and property from government intrusion".to_string(),
        },
        ConstitutionalProvision {
            provision: "Sixth Amendment - Right to Counsel".to_string(),
            article: "VI".to_string(),
            section: String::new(),
            text: "In all criminal prosecutions, the accused shall enjoy the right to have \
                   the Assistance of Counsel for his defence."
                .to_string(),
            application: "Ensures right to legal representation in criminal proceedings"
                .to_string(),
        },
    ]
}

pub fn statutes() -> Vec<Statute> {
    vec![
        Statute {
            statute_name: "UCC 1-207 - Reservation of Rights".to_string(),
            citation: "UCC § 1-207".to_string(),
            code_type: "UCC".to_string(),
            section: "1-207".to_string(),
            text: "A party who with explicit reservation of rights performs or promises \
                   performance or assents to performance of the contract is not prejudiced \
                   by his failure to perform."
                .to_string(),
            application: "Preserves rights when conducting business under government regulation"
                .to_string(),
            key_provisions: vec![
                "without prejudice".to_string(),
                "reservation of rights".to_string(),
                "commercial transactions".to_string(),
            ],
        },
        Statute {
            statute_name: "UCC 3-104 - Negotiable Instrument Definition".to_string(),
            citation: "UCC § 3-104".to_string(),
            code_type: "UCC".to_string(),
            section: "3-104".to_string(),
            text: "A negotiable instrument is an unconditional promise or order to pay a \
                   fixed amount of money."
                .to_string(),
            application: "Defines requirements for negotiable instruments in commerce".to_string(),
            key_provisions: vec![
                "unconditional promise".to_string(),
                "fixed amount".to_string(),
                "negotiable instrument".to_string(),
            ],
        },
        Statute {
            statute_name: "Title 18 USC 241 - Conspiracy Against Rights".to_string(),
            citation: "18 U.S.C. § 241".to_string(),
            code_type: "USC".to_string(),
            section: "241".to_string(),
            text: "If two or more persons conspire to injure, oppress, threaten, or \
                   intimidate any person in the free exercise or enjoyment of any right or \
                   privilege secured to him by the Constitution, they shall be fined or \
                   imprisoned."
                .to_string(),
            application: "Criminal liability for conspiring to violate constitutional rights"
                .to_string(),
            key_provisions: vec![
                "conspiracy".to_string(),
                "constitutional rights".to_string(),
                "criminal penalties".to_string(),
            ],
        },
        Statute {
            statute_name: "Title 18 USC 242 - Deprivation of Rights Under Color of Law"
                .to_string(),
            citation: "18 U.S.C. § 242".to_string(),
            code_type: "USC".to_string(),
            section: "242".to_string(),
            text: "Whoever, under color of any law, statute, ordinance, regulation, or \
                   custom, willfully subjects any person to the deprivation of any rights \
                   shall be fined or imprisoned."
                .to_string(),
            application: "Criminal liability for rights violations by government officials"
                .to_string(),
            key_provisions: vec![
                "color of law".to_string(),
                "rights deprivation".to_string(),
                "official misconduct".to_string(),
            ],
        },
    ]
}

pub fn affidavits() -> Vec<AffidavitTemplate> {
    vec![
        AffidavitTemplate {
            title: "Affidavit of Status".to_string(),
            kind: "status_correction".to_string(),
            description: "Declares standing and rebuts presumptions in government records"
                .to_string(),
            template_text: "AFFIDAVIT OF STATUS\n\nI, [NAME], being duly sworn, hereby \
                            declare:\n1. I am a living man/woman.\n2. My domicile is \
                            [DOMICILE]."
                .to_string(),
            required_elements: vec![
                "name".to_string(),
                "domicile".to_string(),
                "status declaration".to_string(),
                "notarization".to_string(),
            ],
            jurisdiction: "common_law".to_string(),
            usage_notes: "Use to correct status in government records".to_string(),
        },
        AffidavitTemplate {
            title: "Affidavit of Jurisdiction".to_string(),
            kind: "jurisdiction".to_string(),
            description: "Declares proper jurisdiction and venue for legal matters".to_string(),
            template_text: "AFFIDAVIT OF JURISDICTION\n\nI, [NAME], hereby declare:\n1. My \
                            proper jurisdiction is [JURISDICTION].\n2. I consent only to \
                            laws applicable to that jurisdiction."
                .to_string(),
            required_elements: vec![
                "jurisdiction declaration".to_string(),
                "venue specification".to_string(),
                "consent limitations".to_string(),
            ],
            jurisdiction: "common_law".to_string(),
            usage_notes: "Use to establish proper jurisdiction in legal proceedings".to_string(),
        },
    ]
}
