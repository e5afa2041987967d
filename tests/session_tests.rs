use strategist::protocol::decode_placement;
use strategist::{
    Field, GameStatus, InMemoryTransport, ProtocolError, Session, SessionState, StandardFleet,
    Transport, TurnController,
};

fn session(transport: InMemoryTransport) -> Session<StandardFleet> {
    let controller = TurnController::with_seed(Field::default(), StandardFleet::default(), 0);
    Session::new(controller, Box::new(transport))
}

#[tokio::test]
async fn plays_turns_and_counts_only_our_own() -> anyhow::Result<()> {
    let (mut server, client) = InMemoryTransport::pair();
    let mut player = session(client);

    let script = async move {
        server.send("hello player").await?;
        let placement = decode_placement(&server.recv().await?)?;
        assert_eq!(placement.len(), 3);

        server.send("waiting").await?;
        server.send("{}").await?;

        server.send("your turn").await?;
        assert_eq!(server.recv().await?, r#"{"move":"first_move"}"#);
        server.send("{}").await?;

        server.send("waiting").await?;
        server.send(r#"{"result":{"attacked":{"position":[0,0],"near":[]}}}"#).await?;

        server.send("your turn").await?;
        let second = server.recv().await?;
        assert!(second.starts_with(r#"{"move":{"ship":"#), "got {}", second);
        server.send("{}").await?;

        server.send("you win").await?;
        anyhow::Ok(server)
    };

    let (status, _server) = tokio::try_join!(player.run(), script)?;
    assert_eq!(status, GameStatus::Won);
    assert_eq!(player.state(), SessionState::Terminal(GameStatus::Won));
    assert_eq!(player.controller().turn(), 3);
    Ok(())
}

#[tokio::test]
async fn sunk_fleet_sends_explicit_pass() -> anyhow::Result<()> {
    let (mut server, client) = InMemoryTransport::pair();
    let mut player = session(client);

    let script = async move {
        server.send("hello").await?;
        server.recv().await?;
        server.send("waiting").await?;
        server.send(r#"{"condition":{"me":{},"enemy":{"w":{"hp":3}}}}"#).await?;
        server.send("your turn").await?;
        server.recv().await?;
        server.send("{}").await?;
        server.send("your turn").await?;
        let pass = server.recv().await?;
        server.send("{}").await?;
        server.send("you lose").await?;
        anyhow::Ok(pass)
    };

    let (status, pass) = tokio::try_join!(player.run(), script)?;
    assert_eq!(status, GameStatus::Lost);
    assert_eq!(pass, r#"{"pass":{}}"#);
    Ok(())
}

#[tokio::test]
async fn unknown_status_is_fatal() {
    let (mut server, client) = InMemoryTransport::pair();
    let mut player = session(client);

    let script = async move {
        server.send("hello").await.unwrap();
        server.recv().await.unwrap();
        server.send("your move").await.unwrap();
        server
    };

    let (result, _server) = tokio::join!(player.run(), script);
    let err = result.unwrap_err();
    assert_eq!(
        err.downcast_ref::<ProtocolError>(),
        Some(&ProtocolError::UnknownStatus("your move".into()))
    );
    assert_eq!(player.status(), GameStatus::InProgress);
}

#[tokio::test]
async fn malformed_report_is_fatal() {
    let (mut server, client) = InMemoryTransport::pair();
    let mut player = session(client);

    let script = async move {
        server.send("hello").await.unwrap();
        server.recv().await.unwrap();
        server.send("waiting").await.unwrap();
        server.send("{not json").await.unwrap();
        server
    };

    let (result, _server) = tokio::join!(player.run(), script);
    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ProtocolError>(),
        Some(ProtocolError::MalformedReport(_))
    ));
}

#[tokio::test]
async fn closed_connection_ends_the_session() {
    let (server, client) = InMemoryTransport::pair();
    let mut player = session(client);
    drop(server);
    assert!(player.run().await.is_err());
}
