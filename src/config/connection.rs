//! The built-in patch for `jenssegers/mongodb`'s `Connection.php`.
//!
//! The driver's connection class forwards unknown calls to the underlying
//! database handle, so Laravel's `DB::transaction` helpers never reach a
//! MongoDB session. The patch below adds the session-backed
//! `beginTransaction` / `commit` / `rollBack` methods next to `__call`.
//!
//! Every literal here must match the vendored file byte-for-byte; any
//! reformatting of `Connection.php` turns the corresponding step into a
//! silent no-op.

use crate::config::schema::PatchSpec;

/// Location of the driver connection class, relative to the project root.
pub const CONNECTION_PATH: &str = "vendor/jenssegers/mongodb/src/Connection.php";

/// Import line the extra `use` statements are appended after.
pub const ANCHOR_IMPORT: &str = r#"use MongoDB\Client;"#;

pub const EXTRA_IMPORT: &str = r#"use MongoDB\Driver\ReadConcern;
use MongoDB\Driver\ReadPreference;
use MongoDB\Driver\WriteConcern;"#;

/// Tail method of the connection class; the session methods follow it.
pub const ANCHOR_FUNCTION: &str = r#"public function __call($method, $parameters)
    {
        return call_user_func_array([$this->db, $method], $parameters);
    }"#;

pub const EXTRA_FUNCTION: &str = r#"/**
     * create a session and start a transaction in session
     *
     * In version 4.0, MongoDB supports multi-document transactions on replica sets.
     * In version 4.2, MongoDB introduces distributed transactions, which adds support for multi-document transactions on sharded clusters and incorporates the existing support for multi-document transactions on replica sets.
     * To use transactions on MongoDB 4.2 deployments(replica sets and sharded clusters), clients must use MongoDB drivers updated for MongoDB 4.2.
     *
     * @see https://docs.mongodb.com/manual/core/transactions/
     */
    public function beginTransaction()
    {
        $this->session_key = uniqid();
        $this->sessions[$this->session_key] = $this->connection->startSession();

        $this->sessions[$this->session_key]->startTransaction([
            'readPreference' => new ReadPreference(ReadPreference::RP_PRIMARY),
            'writeConcern' => new WriteConcern(1),
            'readConcern' => new ReadConcern(ReadConcern::LOCAL)
        ]);
    }

    /**
     * commit transaction in this session and close this session
     */
    public function commit()
    {
        if ($session = $this->getSession()) {
            $session->commitTransaction();
            $this->setLastSession();
        }
    }

    /**
     * rollback transaction in this session and close this session
     */
    public function rollBack($toLevel = null)
    {
        if ($session = $this->getSession()) {
            $session->abortTransaction();
            $this->setLastSession();
        }
    }

    /**
     * close this session and get last session key to session_key
     * Why do it ? Because nested transactions
     */
    protected function setLastSession()
    {
        if ($session = $this->getSession()) {
            $session->endSession();
            unset($this->sessions[$this->session_key]);
            if (empty($this->sessions)) {
                $this->session_key = null;
            } else {
                end($this->sessions);
                $this->session_key = key($this->sessions);
            }
        }
    }

    /**
     * get now session if it has session
     * @return \MongoDB\Driver\Session|null
     */
    public function getSession()
    {
        return $this->sessions[$this->session_key] ?? null;
    }"#;

/// The transaction patch for `Connection.php`.
pub const TRANSACTION_PATCH: PatchSpec = PatchSpec {
    anchor_import: ANCHOR_IMPORT,
    extra_import: EXTRA_IMPORT,
    anchor_function: ANCHOR_FUNCTION,
    extra_function: EXTRA_FUNCTION,
};
