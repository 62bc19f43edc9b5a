use loanbook::application::loan_service::CreateLoanRequest;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use std::collections::HashSet;

mod common;

fn random_request(rng: &mut impl Rng, name: &str) -> CreateLoanRequest {
    let funding = Decimal::new(rng.gen_range(1..10_000_000), 2);
    let repayment = funding + Decimal::new(rng.gen_range(0..1_000_000), 2);
    CreateLoanRequest {
        borrower_name: Some(name.to_string()),
        funding_amount: Some(funding),
        repayment_amount: Some(repayment),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_creates_assign_distinct_ids() {
    let service = common::service();

    let handles: Vec<_> = (0..500)
        .map(|i| {
            let service = service.clone();
            let request = random_request(&mut rand::thread_rng(), &format!("Borrower {}", i % 7));
            tokio::spawn(async move { service.create(request).await.unwrap() })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        let loan = handle.await.unwrap();
        ids.insert(loan.id().clone());
    }

    assert_eq!(ids.len(), 500);
    let listing = service.list_all().await;
    assert_eq!(listing.total_count, 500);
    assert_eq!(listing.loans.len(), 500);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_deletes_remove_each_loan_once() {
    let service = common::service();
    let mut rng = rand::thread_rng();
    let mut ids = Vec::new();
    for _ in 0..100 {
        let loan = service.create(random_request(&mut rng, "Grace")).await.unwrap();
        ids.push(loan.id().to_string());
    }

    // Two racing deletes per loan: exactly one of them may win.
    let handles: Vec<_> = ids
        .iter()
        .chain(ids.iter())
        .cloned()
        .map(|id| {
            let service = service.clone();
            tokio::spawn(async move { service.delete(&id).await.is_ok() })
        })
        .collect();

    let mut removed = 0;
    for handle in handles {
        if handle.await.unwrap() {
            removed += 1;
        }
    }

    assert_eq!(removed, 100);
    assert_eq!(service.list_all().await.total_count, 0);
    assert!(service.list_by_borrower("grace").await.is_err());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_readers_never_see_partial_state() {
    let service = common::service();

    let writer = {
        let service = service.clone();
        tokio::spawn(async move {
            let mut rng = StdRng::from_entropy();
            for _ in 0..200 {
                let request = random_request(&mut rng, "Heidi");
                let loan = service.create(request).await.unwrap();
                service.delete(loan.id().as_str()).await.unwrap();
            }
        })
    };

    let reader = {
        let service = service.clone();
        tokio::spawn(async move {
            for _ in 0..200 {
                let listing = service.list_all().await;
                assert_eq!(listing.total_count, listing.loans.len());
                assert!(listing.total_count <= 1);
            }
        })
    };

    writer.await.unwrap();
    reader.await.unwrap();
    assert_eq!(service.list_all().await.total_count, 0);
}

#[tokio::test]
async fn test_random_valid_requests_round_trip() {
    let service = common::service();
    let mut rng = rand::thread_rng();

    for i in 0..50 {
        let request = random_request(&mut rng, &format!("Ivan {i}"));
        let expected_funding = request.funding_amount.unwrap();
        let created = service.create(request).await.unwrap();

        assert_eq!(created.funding_amount().value(), expected_funding);
        assert_eq!(service.get(created.id().as_str()).await.unwrap(), created);
    }
}
