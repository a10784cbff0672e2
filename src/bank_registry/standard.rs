use crate::algorithm::AlgorithmTag;
use crate::bank_registry::{BankDefinition, BankRegistry, BranchRange};
use ahash::AHashMap;
use lazy_static::lazy_static;

type BankEntry = (u8, &'static [(u16, u16)], Option<AlgorithmTag>);

#[rustfmt::skip]
const BANKS: &[BankEntry] = &[
    (1,  &[(1, 999), (1100, 1199), (1800, 1899)], None),
    (2,  &[(1, 999), (1200, 1299)], None),
    (3,  &[(1, 999), (1300, 1399), (1500, 1599), (1700, 1799), (1900, 1999)], None),
    (6,  &[(1, 999), (1400, 1499)], None),
    (8,  &[(6500, 6599)], Some(AlgorithmTag::D)),
    // The published branch is 0000; left open so any branch is accepted.
    (9,  &[], Some(AlgorithmTag::E)),
    (11, &[(5000, 6499), (6600, 8999)], None),
    (12, &[(3000, 3299), (3400, 3499), (3600, 3699)], None),
    (13, &[(4900, 4999)], None),
    (14, &[(4700, 4799)], None),
    (15, &[(3900, 3999)], None),
    (16, &[(4400, 4499)], None),
    (17, &[(3300, 3399)], None),
    (18, &[(3500, 3599)], None),
    (19, &[(4600, 4649)], None),
    (20, &[(4100, 4199)], None),
    (21, &[(4800, 4899)], None),
    (22, &[(4000, 4049)], None),
    (23, &[(3700, 3799)], None),
    (24, &[(4300, 4349)], None),
    (25, &[(2500, 2599)], Some(AlgorithmTag::F)),
    (26, &[(2600, 2699)], Some(AlgorithmTag::G)),
    (27, &[(3800, 3849)], None),
    (28, &[(2100, 2149)], Some(AlgorithmTag::G)),
    (29, &[(2150, 2299)], Some(AlgorithmTag::G)),
    (30, &[(2900, 2949)], None),
    (31, &[(2800, 2849)], Some(AlgorithmTag::X)),
    (33, &[(6700, 6799)], Some(AlgorithmTag::F)),
    (35, &[(2400, 2499)], None),
    (38, &[(9000, 9499)], None),
];

lazy_static! {
    static ref STANDARD_BANKS: AHashMap<u8, BankDefinition> = BANKS
        .iter()
        .map(|(bank_id, ranges, algorithm)| {
            let ranges = ranges
                .iter()
                .map(|(start, end)| BranchRange(*start, *end))
                .collect();
            (*bank_id, BankDefinition::new(ranges, *algorithm))
        })
        .collect();
}

/// The bank and branch table published for New Zealand bank accounts.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardBankRegistry;

impl StandardBankRegistry {
    pub fn bank_ids(&self) -> impl Iterator<Item = u8> {
        BANKS.iter().map(|(bank_id, _, _)| *bank_id)
    }

    pub(crate) fn definitions() -> &'static AHashMap<u8, BankDefinition> {
        &STANDARD_BANKS
    }
}

impl BankRegistry for StandardBankRegistry {
    fn lookup(&self, bank_id: u8) -> Option<&BankDefinition> {
        STANDARD_BANKS.get(&bank_id)
    }
}
