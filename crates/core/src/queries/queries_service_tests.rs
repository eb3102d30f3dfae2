//! Unit tests for the query service.

use super::*;
use crate::accounts::{Account, AccountType};
use crate::dataset::{Dataset, DatasetProviderTrait, MockDatasetProvider};
use crate::errors::Error;
use crate::fx::{Currency, RateTable};
use crate::organization::{is_woman, Company, Holding, Sex, User};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

// ============================================================================
// Helpers
// ============================================================================

fn mock_service() -> QueryService {
    let holdings = MockDatasetProvider.generate().unwrap();
    QueryService::new(
        Arc::new(Dataset::new(holdings)),
        Arc::new(RateTable::default()),
    )
}

fn service_for(holdings: Vec<Holding>) -> QueryService {
    QueryService::new(
        Arc::new(Dataset::new(holdings)),
        Arc::new(RateTable::default()),
    )
}

fn pln(number: &str, amount: Decimal, account_type: AccountType) -> Account {
    Account::new(number, amount, Currency::Pln, account_type)
}

fn set(values: &[&str]) -> HashSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

// ============================================================================
// Counting
// ============================================================================

#[test]
fn test_counts_on_mock_dataset() {
    let service = mock_service();
    assert_eq!(service.holdings_with_companies_count(), 2);
    assert_eq!(service.companies_count(), 4);
    assert_eq!(service.users_count(), 9);
    assert_eq!(service.accounts_count(), 11);
    assert_eq!(service.women_count(), 4);
}

#[test]
fn test_holdings_with_companies_never_exceeds_holdings() {
    let service = mock_service();
    assert!(service.holdings_with_companies_count() <= service.dataset().holdings().len());
}

#[test]
fn test_age_squares_sum() {
    assert_eq!(mock_service().age_squares_sum(), 13806);
}

#[test]
fn test_counts_on_empty_dataset() {
    let service = service_for(Vec::new());
    assert_eq!(service.holdings_with_companies_count(), 0);
    assert_eq!(service.companies_count(), 0);
    assert_eq!(service.users_count(), 0);
    assert_eq!(service.accounts_count(), 0);
    assert_eq!(service.age_squares_sum(), 0);
}

// ============================================================================
// Projections
// ============================================================================

#[test]
fn test_holding_names_are_lowercased_in_order() {
    assert_eq!(
        mock_service().holding_names(),
        vec!["nestle", "coca-cola", "pepsico"]
    );
}

#[test]
fn test_holding_names_as_string_is_sorted_and_parenthesized() {
    assert_eq!(
        mock_service().holding_names_as_string(),
        "(Coca-Cola, Nestle, Pepsico)"
    );

    let service = service_for(vec![
        Holding::new("Nestle", Vec::new()),
        Holding::new("Coca-Cola", Vec::new()),
    ]);
    assert_eq!(service.holding_names_as_string(), "(Coca-Cola, Nestle)");
}

#[test]
fn test_company_names_variants_agree() {
    let service = mock_service();
    let expected = vec!["Nestle Polska", "Gerber", "Coca-Cola Poland", "Fanta"];

    assert_eq!(service.company_names(), expected);
    assert_eq!(
        service.company_names_linked().into_iter().collect::<Vec<_>>(),
        expected
    );
    assert_eq!(
        service.company_names_as_string(),
        "Nestle Polska+Gerber+Coca-Cola Poland+Fanta"
    );
    assert_eq!(
        service.company_names_as_string_folded(),
        service.company_names_as_string()
    );
}

#[test]
fn test_folded_join_of_nothing_is_empty() {
    assert_eq!(service_for(Vec::new()).company_names_as_string_folded(), "");
}

#[test]
fn test_first_n_company_names() {
    let service = mock_service();
    assert_eq!(
        service.first_n_company_names(2),
        set(&["Nestle Polska", "Gerber"])
    );
    assert_eq!(service.first_n_company_names(100).len(), 4);
    assert!(service.first_n_company_names(0).is_empty());
}

#[test]
fn test_currencies_as_string() {
    let service = mock_service();
    assert_eq!(service.currencies_as_string(), "CHF, EUR, PLN, USD");
    assert_eq!(service.supported_currencies_as_string(), "CHF, EUR, PLN, USD");

    let only_pln = service_for(vec![Holding::new(
        "H",
        vec![Company::new(
            "C",
            vec![User::new(
                "A",
                "B",
                20,
                Sex::Man,
                vec![
                    pln("1", dec!(1), AccountType::Ror),
                    pln("2", dec!(2), AccountType::Ror),
                ],
            )],
        )],
    )]);
    assert_eq!(only_pln.currencies_as_string(), "PLN");
}

#[test]
fn test_first_names_matching() {
    let service = mock_service();
    assert_eq!(
        service.first_names_matching(is_woman),
        set(&["Zosia", "Anna", "Ewa"])
    );
    assert_eq!(
        service.first_names_matching(|user| user.age >= 60),
        set(&["Adam"])
    );
}

#[test]
fn test_old_women_first_names_rejects_men() {
    let service = mock_service();
    assert_eq!(service.old_women_first_names(40), vec!["Anna", "Ewa"]);
    assert_eq!(
        service.old_women_first_names(0),
        vec!["Zosia", "Anna", "Kim", "Ewa", "Anna"]
    );
}

#[test]
fn test_user_first_names_as_string_is_distinct_and_sorted() {
    assert_eq!(
        mock_service().user_first_names_as_string(),
        "Adam Alfred Anna Ewa Kim Zenek Zenon Zosia"
    );
}

#[test]
fn test_users_descending() {
    assert_eq!(
        mock_service().users_descending(),
        vec![
            "Zosia Psikuta",
            "Zenon Kucowski",
            "Zenek Jawowy",
            "Kim Lis",
            "Ewa Nowak",
            "Anna Zielinska",
            "Anna Kowalska",
            "Alfred Pasibrzuch",
            "Adam Wojcik",
        ]
    );
}

#[test]
fn test_adult_status() {
    let service = mock_service();
    let ewa = service.find_user(|user| user.last_name == "Nowak");
    assert_eq!(service.adult_status(ewa.as_ref()), "Ewa Nowak is 41 years old");
    assert_eq!(service.adult_status(None), "No user");
}

#[test]
fn test_for_each_company_visits_all_in_order() {
    let service = mock_service();
    let mut visited = Vec::new();
    service.for_each_company(|company| visited.push(company.name.clone()));
    assert_eq!(visited, service.company_names());
}

// ============================================================================
// Grouping
// ============================================================================

#[test]
fn test_users_by_sex_excludes_other() {
    let partition = mock_service().users_by_sex();
    assert_eq!(
        partition[&true],
        set(&["Psikuta", "Kowalska", "Nowak", "Zielinska"])
    );
    assert_eq!(
        partition[&false],
        set(&["Kucowski", "Pasibrzuch", "Wojcik", "Jawowy"])
    );
    assert!(!partition.values().any(|names| names.contains("Lis")));
}

#[test]
fn test_users_by_sex_with_only_other_users() {
    let service = service_for(vec![Holding::new(
        "H",
        vec![Company::new(
            "C",
            vec![
                User::new("A", "One", 20, Sex::Other, Vec::new()),
                User::new("B", "Two", 30, Sex::Other, Vec::new()),
            ],
        )],
    )]);

    let partition = service.users_by_sex();
    assert_eq!(partition.len(), 2);
    assert!(partition[&true].is_empty());
    assert!(partition[&false].is_empty());
}

#[test]
fn test_money_on_accounts() {
    let totals = mock_service().money_on_accounts();
    let expected: HashMap<AccountType, Decimal> = HashMap::from([
        (AccountType::Ror, dec!(5800.8)),
        (AccountType::Savings, dec!(3356)),
        (AccountType::Personal, dec!(30.5)),
        (AccountType::Lo, dec!(465.6)),
        (AccountType::Rb, dec!(37.2)),
        (AccountType::Ro, dec!(64.2)),
    ]);
    assert_eq!(totals, expected);
}

#[test]
fn test_money_on_accounts_truncates_each_account() {
    // 1.2345678 EUR * 4.28 = 5.283950184 -> 5.28395 (six digits, truncated)
    let service = service_for(vec![Holding::new(
        "H",
        vec![Company::new(
            "C",
            vec![User::new(
                "A",
                "B",
                20,
                Sex::Man,
                vec![
                    Account::new("1", dec!(1.2345678), Currency::Eur, AccountType::Ror),
                    Account::new("2", dec!(1.2345678), Currency::Eur, AccountType::Ror),
                ],
            )],
        )],
    )]);
    assert_eq!(
        service.money_on_accounts()[&AccountType::Ror],
        dec!(10.5679)
    );
}

#[test]
fn test_men_balances_by_account_type() {
    let service = mock_service();
    let balances = service.men_balances_by_account_type();
    let zenon = service.get_user(|u| u.first_name == "Zenon").unwrap();
    let alfred = service.get_user(|u| u.first_name == "Alfred").unwrap();
    let adam = service.get_user(|u| u.first_name == "Adam").unwrap();

    assert_eq!(balances.len(), 4);
    assert_eq!(balances[&AccountType::Ror], HashMap::from([(zenon, dec!(1860))]));
    assert_eq!(
        balances[&AccountType::Personal],
        HashMap::from([(alfred, dec!(30.5))])
    );
    assert_eq!(
        balances[&AccountType::Savings],
        HashMap::from([(adam.clone(), dec!(2500))])
    );
    assert_eq!(balances[&AccountType::Rb], HashMap::from([(adam, dec!(37.2))]));
}

#[test]
fn test_other_sex_money() {
    let service = mock_service();
    let companies: Vec<&Company> = service.dataset().companies().collect();
    assert_eq!(service.other_sex_money(companies[1]), dec!(256.8));
    assert_eq!(service.other_sex_money(companies[0]), Decimal::ZERO);
}

// ============================================================================
// Lookup tables
// ============================================================================

#[test]
fn test_users_per_company() {
    let service = mock_service();
    let table = service.users_per_company().unwrap();
    assert_eq!(table.len(), 4);
    assert_eq!(table["Fanta"].len(), 1);
    assert_eq!(table["Fanta"][0].last_name, "Zielinska");
}

#[test]
fn test_users_per_company_as_string() {
    let table = mock_service().users_per_company_as_string().unwrap();
    assert_eq!(
        table["Gerber"],
        vec!["Anna Kowalska".to_string(), "Kim Lis".to_string()]
    );
}

#[test]
fn test_users_per_company_with_converter() {
    let table = mock_service()
        .users_per_company_with(|user| user.age)
        .unwrap();
    assert_eq!(table["Coca-Cola Poland"], vec![61, 19, 41]);
}

#[test]
fn test_users_per_company_rejects_duplicate_names() {
    let service = service_for(vec![
        Holding::new("H1", vec![Company::new("Same", Vec::new())]),
        Holding::new("H2", vec![Company::new("Same", Vec::new())]),
    ]);
    let result = service.users_per_company();
    assert!(matches!(result, Err(Error::DuplicateKey(key)) if key.contains("Same")));
}

#[test]
fn test_accounts_by_number() {
    let table = mock_service().accounts_by_number().unwrap();
    assert_eq!(table.len(), 11);
    assert_eq!(table["PL-010"].amount, dec!(700));
    assert_eq!(table["PL-010"].currency, Currency::Usd);
}

#[test]
fn test_accounts_by_number_rejects_duplicates() {
    let service = service_for(vec![Holding::new(
        "H",
        vec![Company::new(
            "C",
            vec![
                User::new("A", "B", 20, Sex::Man, vec![pln("X", dec!(1), AccountType::Ror)]),
                User::new("C", "D", 20, Sex::Man, vec![pln("X", dec!(2), AccountType::Lo)]),
            ],
        )],
    )]);
    assert!(matches!(
        service.accounts_by_number(),
        Err(Error::DuplicateKey(_))
    ));
}

// ============================================================================
// Single-result lookups
// ============================================================================

#[test]
fn test_find_user_returns_first_match() {
    let service = mock_service();
    let anna = service.find_user(|user| user.first_name == "Anna").unwrap();
    assert_eq!(anna.last_name, "Kowalska");
    assert!(service.find_user(|user| user.age > 100).is_none());
}

#[test]
fn test_get_user_signals_not_found() {
    let service = mock_service();
    assert_eq!(
        service.get_user(|user| user.last_name == "Lis").unwrap().sex,
        Sex::Other
    );
    assert!(matches!(
        service.get_user(|user| user.age > 100),
        Err(Error::NotFound(_))
    ));
}

// ============================================================================
// Ranking and categories
// ============================================================================

#[test]
fn test_richest_woman_on_mock_dataset() {
    let richest = mock_service().richest_woman().unwrap();
    assert_eq!(richest.full_name(), "Ewa Nowak");
}

#[test]
fn test_richest_woman_scenario() {
    let service = service_for(vec![Holding::new(
        "H",
        vec![Company::new(
            "C",
            vec![
                User::new(
                    "B",
                    "Poorer",
                    30,
                    Sex::Woman,
                    vec![pln("2", dec!(50), AccountType::Ror)],
                ),
                User::new(
                    "A",
                    "Richer",
                    30,
                    Sex::Woman,
                    vec![
                        pln("1", dec!(60), AccountType::Ror),
                        pln("3", dec!(40), AccountType::Savings),
                    ],
                ),
            ],
        )],
    )]);
    assert_eq!(service.richest_woman().unwrap().last_name, "Richer");
}

#[test]
fn test_richest_woman_tie_keeps_first() {
    let service = service_for(vec![Holding::new(
        "H",
        vec![Company::new(
            "C",
            vec![
                User::new("A", "First", 30, Sex::Woman, vec![pln("1", dec!(10), AccountType::Ror)]),
                User::new("B", "Second", 30, Sex::Woman, vec![pln("2", dec!(10), AccountType::Ror)]),
            ],
        )],
    )]);
    assert_eq!(service.richest_woman().unwrap().last_name, "First");
}

#[test]
fn test_richest_woman_without_women() {
    let service = service_for(vec![Holding::new(
        "H",
        vec![Company::new(
            "C",
            vec![User::new("A", "B", 30, Sex::Man, Vec::new())],
        )],
    )]);
    assert!(service.richest_woman().is_none());
}

#[test]
fn test_user_total_converts_each_account() {
    let service = mock_service();
    let zosia = service.get_user(|u| u.first_name == "Zosia").unwrap();
    assert_eq!(service.user_total_in_reference(&zosia), dec!(1856));
}

#[test]
fn test_most_popular_account_type() {
    assert_eq!(
        mock_service().most_popular_account_type().unwrap(),
        AccountType::Ror
    );
}

#[test]
fn test_most_popular_account_type_with_strict_majority() {
    let service = service_for(vec![Holding::new(
        "H",
        vec![Company::new(
            "C",
            vec![User::new(
                "A",
                "B",
                30,
                Sex::Man,
                vec![
                    pln("1", dec!(1), AccountType::Lo),
                    pln("2", dec!(1), AccountType::Savings),
                    pln("3", dec!(1), AccountType::Savings),
                ],
            )],
        )],
    )]);
    assert_eq!(
        service.most_popular_account_type().unwrap(),
        AccountType::Savings
    );
}

#[test]
fn test_most_popular_account_type_without_accounts() {
    let service = service_for(vec![Holding::new("H", Vec::new())]);
    assert!(matches!(
        service.most_popular_account_type(),
        Err(Error::InvalidState(_))
    ));
}

// ============================================================================
// Sampling
// ============================================================================

#[test]
fn test_users_capped() {
    let service = mock_service();
    assert_eq!(service.users_capped().len(), 9);

    let many_users: Vec<User> = (0..15)
        .map(|i| User::new(format!("U{}", i), "X", 20, Sex::Man, Vec::new()))
        .collect();
    let big = service_for(vec![Holding::new("H", vec![Company::new("C", many_users)])]);
    assert_eq!(big.users_capped().len(), 10);
}

#[test]
fn test_random_users_are_distinct_members() {
    let service = mock_service();
    let mut rng = StdRng::seed_from_u64(7);
    let sample = service.random_users_with(5, &mut rng).unwrap();

    assert_eq!(sample.len(), 5);
    let distinct: HashSet<&User> = sample.iter().collect();
    assert_eq!(distinct.len(), 5);
    let all: Vec<&User> = service.dataset().users().collect();
    assert!(sample.iter().all(|user| all.contains(&user)));
}

#[test]
fn test_random_users_whole_population() {
    let service = mock_service();
    assert_eq!(service.random_users(9).unwrap().len(), 9);
    assert!(service.random_users(0).unwrap().is_empty());
}

#[test]
fn test_random_users_bounds_violation() {
    let result = mock_service().random_users(10);
    assert!(matches!(
        result,
        Err(Error::BoundsViolation {
            requested: 10,
            available: 9
        })
    ));
}

#[test]
fn test_random_users_counts_duplicates_once() {
    let twin = User::new("Twin", "Same", 30, Sex::Woman, Vec::new());
    let service = service_for(vec![Holding::new(
        "H",
        vec![Company::new("C", vec![twin.clone(), twin])],
    )]);
    assert!(service.random_users(1).is_ok());
    assert!(matches!(
        service.random_users(2),
        Err(Error::BoundsViolation { available: 1, .. })
    ));
}
