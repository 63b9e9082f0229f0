//! End-to-end coverage against a real (tempfile-backed) SQLite database,
//! one test per invariant/scenario named in §8 plus the cascade/set-null
//! and pagination properties nearby.

mod common;

use catalog_core::enums::{StarredSyncState, TrackAdvisory, TrackArtistLinkType};
use catalog_core::error::StorageError;
use catalog_core::ids::Id;
use catalog_core::query::artist::ArtistFindParameters;
use catalog_core::query::track::TrackFindParameters;
use catalog_core::range::Range;
use catalog_core::repo;
use chrono::Utc;

fn new_track(name: &str, path: &str) -> repo::track::NewTrack {
    repo::track::NewTrack {
        absolute_path: path.to_string(),
        file_size: 1024,
        last_write_time: Utc::now(),
        added_time: Utc::now(),
        name: name.to_string(),
        duration_ms: 180_000,
        bitrate: Some(320),
        bits_per_sample: None,
        sample_rate: Some(44_100),
        channel_count: Some(2),
        track_number: Some(1),
        date: None,
        original_date: None,
        mbid: None,
        recording_mbid: None,
        copyright: None,
        copyright_url: None,
        advisory: TrackAdvisory::Unknown,
        replay_gain: None,
        artist_display_name: String::new(),
        comment: None,
        release_id: None,
        medium_id: None,
        media_library_id: None,
        directory_id: None,
    }
}

#[tokio::test]
async fn single_track_round_trip() {
    let db = common::open().await;
    let txn = db.begin_write().await.unwrap();

    let artist = repo::artist::create(
        &txn,
        repo::artist::NewArtist { name: "X".to_string(), sort_name: "X".to_string(), mbid: None },
    )
    .await
    .unwrap();

    let release = repo::release::create(
        &txn,
        repo::release::NewRelease {
            name: "Y".to_string(),
            sort_name: "Y".to_string(),
            mbid: Some("m".to_string()),
            release_group_mbid: None,
            total_disc_count: Some(1),
            compilation: false,
            artist_display_name: "X".to_string(),
            barcode: None,
            comment: None,
        },
    )
    .await
    .unwrap();

    let mut new_t = new_track("Z", "/a/Z.flac");
    new_t.release_id = Some(Id::new(release.id));
    let track = repo::track::create(&txn, new_t).await.unwrap();

    repo::track::link_artist(
        &txn,
        Id::new(track.id),
        Id::new(artist.id),
        TrackArtistLinkType::Artist,
        "X".to_string(),
        "X".to_string(),
        false,
    )
    .await
    .unwrap();

    txn.commit().await.unwrap();

    let read = db.begin_read().await.unwrap();

    let found_track = repo::track::find_by_id(&read, Id::new(track.id)).await.unwrap().unwrap();
    let found_release = repo::release::find_by_id(&read, Id::new(found_track.release_id.unwrap())).await.unwrap().unwrap();
    assert_eq!(found_release.mbid.as_deref(), Some("m"));

    let found_release_by_mbid = repo::release::find_by_mbid(&read, "m").await.unwrap().unwrap();
    assert_eq!(found_release_by_mbid.id, release.id);

    let mut params = TrackFindParameters::new(Range::first(10));
    params.artist_id = Some(Id::new(artist.id));
    let page = catalog_core::query::track::find(&read, &params).await.unwrap();
    let release_ids: std::collections::HashSet<i64> =
        page.results.iter().filter_map(|t| t.release_id).collect();
    assert_eq!(release_ids.len(), 1, "artist's tracks span exactly one release");

    read.commit().await.unwrap();
}

#[tokio::test]
async fn orphan_cluster_is_collected_after_its_track_is_removed() {
    let db = common::open().await;
    let txn = db.begin_write().await.unwrap();

    let cluster_type = repo::cluster::create_cluster_type(&txn, "genre".to_string()).await.unwrap();
    let cluster =
        repo::cluster::create(&txn, Id::new(cluster_type.id), "rock".to_string()).await.unwrap();
    let track = repo::track::create(&txn, new_track("Z", "/a/Z.flac")).await.unwrap();
    repo::track::add_to_cluster(&txn, Id::new(track.id), Id::new(cluster.id)).await.unwrap();
    repo::track::remove(&txn, Id::new(track.id)).await.unwrap();

    txn.commit().await.unwrap();

    let sweep_txn = db.begin_write().await.unwrap();
    catalog_core::orphan::run_sweep(&sweep_txn).await.unwrap();
    sweep_txn.commit().await.unwrap();

    let read = db.begin_read().await.unwrap();
    assert!(repo::cluster::find_by_id(&read, Id::new(cluster.id)).await.unwrap().is_none());
    assert!(repo::cluster::find_cluster_type_by_name(&read, "genre").await.unwrap().is_none());

    let remaining = catalog_core::orphan::find_orphan_cluster_ids(&read, Range::first(50)).await.unwrap();
    assert!(remaining.results.is_empty());
    read.commit().await.unwrap();
}

#[tokio::test]
async fn cluster_intersection_returns_only_rows_in_both_clusters() {
    let db = common::open().await;
    let txn = db.begin_write().await.unwrap();

    let cluster_type = repo::cluster::create_cluster_type(&txn, "genre".to_string()).await.unwrap();
    let c1 = repo::cluster::create(&txn, Id::new(cluster_type.id), "rock".to_string()).await.unwrap();
    let c2 = repo::cluster::create(&txn, Id::new(cluster_type.id), "live".to_string()).await.unwrap();

    let t1 = repo::track::create(&txn, new_track("T1", "/a/1.flac")).await.unwrap();
    let t2 = repo::track::create(&txn, new_track("T2", "/a/2.flac")).await.unwrap();
    let t3 = repo::track::create(&txn, new_track("T3", "/a/3.flac")).await.unwrap();

    repo::track::add_to_cluster(&txn, Id::new(t1.id), Id::new(c1.id)).await.unwrap();
    repo::track::add_to_cluster(&txn, Id::new(t2.id), Id::new(c1.id)).await.unwrap();
    repo::track::add_to_cluster(&txn, Id::new(t2.id), Id::new(c2.id)).await.unwrap();
    repo::track::add_to_cluster(&txn, Id::new(t3.id), Id::new(c2.id)).await.unwrap();

    txn.commit().await.unwrap();

    let read = db.begin_read().await.unwrap();
    let mut params = TrackFindParameters::new(Range::first(10));
    params.cluster_ids = vec![Id::new(c1.id), Id::new(c2.id)];
    let page = catalog_core::query::track::find(&read, &params).await.unwrap();

    let ids: Vec<i64> = page.results.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![t2.id]);
    read.commit().await.unwrap();
}

#[tokio::test]
async fn keyword_match_requires_every_keyword() {
    let db = common::open().await;
    let txn = db.begin_write().await.unwrap();

    for (name, sort_name) in [("The Foo Bar", "Foo Bar, The"), ("Foo", "Foo"), ("Bar Baz", "Bar Baz")] {
        repo::artist::create(
            &txn,
            repo::artist::NewArtist { name: name.to_string(), sort_name: sort_name.to_string(), mbid: None },
        )
        .await
        .unwrap();
    }
    txn.commit().await.unwrap();

    let read = db.begin_read().await.unwrap();
    let mut params = ArtistFindParameters::new(Range::first(10));
    params.keywords = vec!["foo".to_string(), "bar".to_string()];
    let page = catalog_core::query::artist::find(&read, &params).await.unwrap();

    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].name, "The Foo Bar");
    read.commit().await.unwrap();
}

#[tokio::test]
async fn keyset_scan_visits_every_row_once_and_reacts_to_concurrent_changes() {
    let db = common::open().await;
    let txn = db.begin_write().await.unwrap();
    let mut created = Vec::with_capacity(100);
    for i in 0..100 {
        let row = repo::track::create(&txn, new_track(&format!("T{i}"), &format!("/a/{i}.flac"))).await.unwrap();
        created.push(row.id);
    }
    txn.commit().await.unwrap();

    // Id 50 (1-indexed first id) is removed before the scan reaches it.
    let delete_txn = db.begin_write().await.unwrap();
    repo::track::remove(&delete_txn, Id::new(created[49])).await.unwrap();
    delete_txn.commit().await.unwrap();

    let mut visited = Vec::new();
    let mut last_id = Id::new(0);
    let mut batches = 0;
    loop {
        let read = db.begin_read().await.unwrap();
        let page = repo::track::find_after_id(&read, last_id, 20).await.unwrap();
        read.commit().await.unwrap();

        if page.is_empty() {
            break;
        }
        for row in &page {
            visited.push(row.id);
        }
        last_id = Id::new(page.last().unwrap().id);
        batches += 1;

        // Insert id 101 partway through the scan; since its id exceeds every
        // cursor seen so far it must still be visited before the scan ends.
        if batches == 2 {
            let insert_txn = db.begin_write().await.unwrap();
            repo::track::create(&insert_txn, new_track("T100", "/a/100.flac")).await.unwrap();
            insert_txn.commit().await.unwrap();
        }
    }

    assert_eq!(visited.len(), 100);
    assert!(!visited.contains(&created[49]));
    assert!(visited.windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test]
async fn starring_state_machine() {
    let db = common::open().await;
    let txn = db.begin_write().await.unwrap();

    let user = repo::user::create(
        &txn,
        repo::user::NewUser {
            login_name: "u".to_string(),
            password_hash: "hash".to_string(),
            password_salt: "salt".to_string(),
            role: catalog_core::enums::UserRole::Regular,
        },
    )
    .await
    .unwrap();
    let track = repo::track::create(&txn, new_track("Z", "/a/Z.flac")).await.unwrap();

    let starred = repo::starred::track::star(
        &txn,
        Id::new(user.id),
        Id::new(track.id),
        "listenbrainz".to_string(),
        Utc::now(),
    )
    .await
    .unwrap();
    assert_eq!(starred.sync_state, StarredSyncState::PendingAdd.as_str());

    let synced = repo::starred::track::set_sync_state(&txn, starred, StarredSyncState::Synchronized).await.unwrap();
    txn.commit().await.unwrap();

    let read = db.begin_read().await.unwrap();
    let found = repo::starred::track::find(&read, Id::new(user.id), Id::new(track.id), "listenbrainz")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.track_id, track.id);
    read.commit().await.unwrap();

    let unstar_txn = db.begin_write().await.unwrap();
    let pending_remove =
        repo::starred::track::set_sync_state(&unstar_txn, synced, StarredSyncState::PendingRemove).await.unwrap();
    repo::starred::track::unstar(&unstar_txn, Id::new(pending_remove.id)).await.unwrap();
    unstar_txn.commit().await.unwrap();

    let read = db.begin_read().await.unwrap();
    assert!(repo::starred::track::find(&read, Id::new(user.id), Id::new(track.id), "listenbrainz")
        .await
        .unwrap()
        .is_none());
    read.commit().await.unwrap();
}

#[tokio::test]
async fn deleting_a_release_cascades_its_tracks() {
    let db = common::open().await;
    let txn = db.begin_write().await.unwrap();

    let release = repo::release::create(
        &txn,
        repo::release::NewRelease {
            name: "Y".to_string(),
            sort_name: "Y".to_string(),
            mbid: None,
            release_group_mbid: None,
            total_disc_count: None,
            compilation: false,
            artist_display_name: String::new(),
            barcode: None,
            comment: None,
        },
    )
    .await
    .unwrap();
    let mut new_t = new_track("Z", "/a/Z.flac");
    new_t.release_id = Some(Id::new(release.id));
    let track = repo::track::create(&txn, new_t).await.unwrap();
    txn.commit().await.unwrap();

    let delete_txn = db.begin_write().await.unwrap();
    repo::release::remove(&delete_txn, Id::new(release.id)).await.unwrap();
    delete_txn.commit().await.unwrap();

    let read = db.begin_read().await.unwrap();
    assert!(repo::track::find_by_id(&read, Id::new(track.id)).await.unwrap().is_none());
    read.commit().await.unwrap();
}

#[tokio::test]
async fn deleting_a_media_library_leaves_its_tracks_with_a_null_library() {
    let db = common::open().await;
    let txn = db.begin_write().await.unwrap();

    let library = repo::media_library::create(&txn, "/music".to_string(), "Music".to_string()).await.unwrap();
    let mut new_t = new_track("Z", "/a/Z.flac");
    new_t.media_library_id = Some(Id::new(library.id));
    let track = repo::track::create(&txn, new_t).await.unwrap();
    txn.commit().await.unwrap();

    let delete_txn = db.begin_write().await.unwrap();
    repo::media_library::remove(&delete_txn, Id::new(library.id)).await.unwrap();
    delete_txn.commit().await.unwrap();

    let read = db.begin_read().await.unwrap();
    let still_there = repo::track::find_by_id(&read, Id::new(track.id)).await.unwrap().unwrap();
    assert_eq!(still_there.media_library_id, None);
    read.commit().await.unwrap();
}

#[tokio::test]
async fn deleting_an_image_nulls_holders_preferred_artwork() {
    let db = common::open().await;
    let txn = db.begin_write().await.unwrap();

    let artist = repo::artist::create(
        &txn,
        repo::artist::NewArtist { name: "X".to_string(), sort_name: "X".to_string(), mbid: None },
    )
    .await
    .unwrap();
    let image = repo::artwork::create_image(&txn, "/art/cover.jpg".to_string(), Utc::now()).await.unwrap();
    let artwork = repo::artwork::create_from_image(&txn, Id::new(image.id)).await.unwrap();
    repo::artwork::ensure_exists(&txn, Id::new(artwork.id)).await.unwrap();
    let artist = repo::artist::set_preferred_artwork(&txn, artist, Some(Id::new(artwork.id))).await.unwrap();
    txn.commit().await.unwrap();

    let delete_txn = db.begin_write().await.unwrap();
    repo::artwork::remove_image(&delete_txn, Id::new(image.id)).await.unwrap();
    delete_txn.commit().await.unwrap();

    let read = db.begin_read().await.unwrap();
    let reloaded = repo::artist::find_by_id(&read, Id::new(artist.id)).await.unwrap().unwrap();
    assert_eq!(reloaded.preferred_artwork_id, None);
    assert!(repo::artwork::find_by_id(&read, Id::new(artwork.id)).await.unwrap().is_none());
    read.commit().await.unwrap();
}

#[tokio::test]
async fn pagination_pages_concatenate_to_the_unpaginated_prefix() {
    let db = common::open().await;
    let txn = db.begin_write().await.unwrap();
    for i in 0..25 {
        repo::artist::create(
            &txn,
            repo::artist::NewArtist {
                name: format!("Artist {i:02}"),
                sort_name: format!("Artist {i:02}"),
                mbid: None,
            },
        )
        .await
        .unwrap();
    }
    txn.commit().await.unwrap();

    let read = db.begin_read().await.unwrap();

    let mut all_params = ArtistFindParameters::new(Range::first(100));
    all_params.sort = catalog_core::enums::ArtistSortMethod::Name;
    let everything = catalog_core::query::artist::find(&read, &all_params).await.unwrap();
    assert_eq!(everything.results.len(), 25);
    assert!(!everything.more_results);

    let page_size = 10;
    let mut concatenated = Vec::new();
    let mut offset = 0u64;
    loop {
        let mut params = ArtistFindParameters::new(Range { offset, size: page_size });
        params.sort = catalog_core::enums::ArtistSortMethod::Name;
        let page = catalog_core::query::artist::find(&read, &params).await.unwrap();
        let is_last = !page.more_results;
        concatenated.extend(page.results.into_iter().map(|a| a.name));
        offset += page_size;
        if is_last {
            break;
        }
    }

    let expected: Vec<String> = everything.results.iter().map(|a| a.name.clone()).collect();
    assert_eq!(concatenated, expected);
    read.commit().await.unwrap();
}

#[tokio::test]
async fn keyword_containing_a_wildcard_character_matches_literally() {
    let db = common::open().await;
    let txn = db.begin_write().await.unwrap();

    for name in ["100% Pure", "100 Pure"] {
        repo::artist::create(
            &txn,
            repo::artist::NewArtist { name: name.to_string(), sort_name: name.to_string(), mbid: None },
        )
        .await
        .unwrap();
    }
    txn.commit().await.unwrap();

    let read = db.begin_read().await.unwrap();
    let mut params = ArtistFindParameters::new(Range::first(10));
    params.keywords = vec!["100%".to_string()];
    let page = catalog_core::query::artist::find(&read, &params).await.unwrap();

    assert_eq!(page.results.len(), 1, "literal '%' must not act as a wildcard");
    assert_eq!(page.results[0].name, "100% Pure");
    read.commit().await.unwrap();
}

#[tokio::test]
async fn name_sort_is_case_insensitive() {
    let db = common::open().await;
    let txn = db.begin_write().await.unwrap();

    for name in ["banana", "Apple", "cherry"] {
        repo::artist::create(
            &txn,
            repo::artist::NewArtist { name: name.to_string(), sort_name: name.to_string(), mbid: None },
        )
        .await
        .unwrap();
    }
    txn.commit().await.unwrap();

    let read = db.begin_read().await.unwrap();
    let mut params = ArtistFindParameters::new(Range::first(10));
    params.sort = catalog_core::enums::ArtistSortMethod::Name;
    let page = catalog_core::query::artist::find(&read, &params).await.unwrap();

    let names: Vec<&str> = page.results.iter().map(|a| a.sort_name.as_str()).collect();
    assert_eq!(names, vec!["Apple", "banana", "cherry"]);
    read.commit().await.unwrap();
}

#[tokio::test]
async fn embedded_image_filter_finds_only_its_owning_track() {
    let db = common::open().await;
    let txn = db.begin_write().await.unwrap();

    let owner = repo::track::create(&txn, new_track("Owner", "/a/owner.flac")).await.unwrap();
    let other = repo::track::create(&txn, new_track("Other", "/a/other.flac")).await.unwrap();
    let image = repo::embedded_image::create(
        &txn,
        repo::embedded_image::NewEmbeddedImage {
            track_id: Id::new(owner.id),
            mime_type: "image/jpeg".to_string(),
            description: None,
        },
        0,
    )
    .await
    .unwrap();
    txn.commit().await.unwrap();

    let read = db.begin_read().await.unwrap();
    let mut params = TrackFindParameters::new(Range::first(10));
    params.embedded_image_id = Some(Id::new(image.id));
    let page = catalog_core::query::track::find(&read, &params).await.unwrap();

    let ids: Vec<i64> = page.results.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![owner.id]);
    assert!(!ids.contains(&other.id));
    read.commit().await.unwrap();
}

#[tokio::test]
async fn duplicate_auth_token_value_surfaces_as_integrity_violation() {
    let db = common::open().await;
    let txn = db.begin_write().await.unwrap();

    let user = repo::user::create(
        &txn,
        repo::user::NewUser {
            login_name: "u".to_string(),
            password_hash: "hash".to_string(),
            password_salt: "salt".to_string(),
            role: catalog_core::enums::UserRole::Regular,
        },
    )
    .await
    .unwrap();

    repo::user::create_auth_token(&txn, Id::new(user.id), "token-1".to_string(), Utc::now()).await.unwrap();
    let result = repo::user::create_auth_token(&txn, Id::new(user.id), "token-1".to_string(), Utc::now()).await;

    assert!(matches!(result, Err(StorageError::IntegrityViolation(_))));
}
