//! Curated ORF coordinates for the coronaviruses the tool was built around.
//! Keys are `accession:start-end` exactly as the extractor prints them.

pub struct OrganismTable {
    pub organism: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

const SARS_COV_2: OrganismTable = OrganismTable {
    organism: "SARS-CoV-2",
    entries: &[
        ("NC_045512.2:266-13483", "SARSCoV2 ORF1a"),
        ("NC_045512.2:266-21555", "SARSCoV2 ORF1ab"),
        ("NC_045512.2:21562-25384", "SARSCoV2 S"),
        ("NC_045512.2:21536-25384", "SARSCoV2 S"),
        ("NC_045512.2:25393-26220", "SARSCoV2 ORF3a"),
        ("NC_045512.2:26245-26472", "SARSCoV2 E"),
        ("NC_045512.2:26523-27191", "SARSCoV2 M"),
        ("NC_045512.2:27202-27387", "SARSCoV2 ORF6"),
        ("NC_045512.2:27394-27759", "SARSCoV2 ORF7a"),
        ("NC_045512.2:27756-27887", "SARSCoV2 ORF7b"),
        ("NC_045512.2:27894-28259", "SARSCoV2 ORF8"),
        ("NC_045512.2:28275-29533", "SARSCoV2 N"),
        ("NC_045512.2:29558-29674", "SARSCoV2 ORF10"),
    ],
};

const RATG13: OrganismTable = OrganismTable {
    organism: "Bat coronavirus RaTG13",
    entries: &[
        ("MN996532.1:251-21537", "ratG13 ORF1ab"),
        ("MN996532.1:21545-25354", "ratG13 S"),
        ("MN996532.1:25363-26190", "ratG13 NS3"),
        ("MN996532.1:28240-29499", "ratG13 N"),
        ("MN996532.1:27860-28225", "ratG13 NS8"),
        ("MN996532.1:26493-27158", "ratG13 M"),
        ("MN996532.1:27360-27725", "ratG13 NS7a"),
        ("MN996532.1:26215-26442", "ratG13 E"),
        ("MN996532.1:27169-27354", "ratG13 NS6"),
        ("MN996532.1:27722-27853", "ratG13 NS7b"),
        ("MN996532.1:251-13465", "ratG13 ORF1a"),
    ],
};

const RS4231: OrganismTable = OrganismTable {
    organism: "Bat SARS-like coronavirus Rs4231",
    entries: &[
        ("KY417146.1:648-1252", "Rs4231 S2"),
        ("KY417146.1:1-118", "Rs4231 NS8"),
        ("KY417146.1:318-569", "Rs4231 S receptor binding"),
        ("KY417146.1:21493-25260", "Rs4231 S"),
        ("KY417146.1:3-220", "Rs4231 M"),
        ("KY417146.1:1-114", "Rs4231 ORF3b"),
        ("KY417146.1:27075-27266", "Rs4231 ORF6"),
        ("KY417146.1:27639-27773", "Rs4231 ORF7b"),
        ("KY417146.1:27780-28145", "Rs4231 ORF8"),
        ("KY417146.1:27274-27642", "Rs4231 ORF7a"),
        ("KY417146.1:25269-26093", "Rs4231 ORF3a"),
        ("KY417146.1:265-13413", "Rs4231 ORF1a"),
    ],
};

const BTRS_BETACOV: OrganismTable = OrganismTable {
    organism: "BtRs-BetaCoV",
    entries: &[
        ("MK211376.1:264-21484", "BtRsBetaCoV ORF1ab"),
        ("MK211376.1:21491-25261", "BtRsBetaCoV spike glycoprotein"),
        ("MK211376.1:26400-27065", "BtRsBetaCoV Matrix"),
        ("MK211376.1:21491-25261", "BtRsBetaCoV S"),
        ("MK211376.1:28683-29951", "BtRsBetaCoV nucleocapsid"),
    ],
};

const SARS_COV_URBANI: OrganismTable = OrganismTable {
    organism: "SARS coronavirus Urbani",
    entries: &[
        ("AY278741.1:648-1252", "CoV_U S2"),
        ("AY278741.1:7-79", "CoV_U NS8"),
        ("AY278741.1:3-220", "CoV_U M"),
        ("AY278741.1:1-153", "CoV_U ORF3b"),
        ("AY278741.1:21492-25259", "CoV_U S"),
        ("AY278741.1:318-569", "CoV_U S receptor binding"),
        ("AY278741.1:26398-27063", "CoV_U M"),
        ("AY278741.1:265-13413", "CoV_U PP1a"),
    ],
};

/// Built-in tables in merge order. Later entries win on identical keys.
pub const BUILTIN_TABLES: [OrganismTable; 5] = [
    SARS_COV_2,
    RATG13,
    RS4231,
    BTRS_BETACOV,
    SARS_COV_URBANI,
];
